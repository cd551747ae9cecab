//! Plain-text rendering of a roster summary for the terminal.

use crate::aggregator::RosterSummary;
use crate::model::PositionLabels;
use crate::utils::config::UNKNOWN_BUCKET_LABEL;

/// Render every summary answer as console text
///
/// **Public** - used by the report command's `--summary` flag
pub fn generate_text_summary(summary: &RosterSummary, labels: &PositionLabels) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  Players analysed:            {}", summary.player_count));
    lines.push(format!("  Players without agency:      {}", summary.without_agency));
    lines.push(format!("  Max goals by a defender:     {}", summary.max_defender_goals));
    lines.push(format!(
        "  Most expensive German plays: {}",
        summary.most_expensive_german_position.as_deref().unwrap_or("-")
    ));
    lines.push(format!(
        "  Agency with fewest players:  {}",
        summary.agency_with_fewest_players.as_deref().unwrap_or("-")
    ));
    lines.push(format!(
        "  Rudest team (avg red cards): {}",
        if summary.rudest_team.is_empty() { "-" } else { summary.rudest_team.as_str() }
    ));

    lines.push(String::new());
    lines.push(format!("  TEAMS ({})", summary.teams.len()));
    for team in &summary.teams {
        lines.push(format!("    {}", team));
    }

    lines.push(String::new());
    lines.push("  TOP TEAMS BY GOALS".to_string());
    for (rank, entry) in summary.top_teams_by_goals.iter().enumerate() {
        lines.push(format!("    {}. {:<30} {:>6}", rank + 1, entry.team, entry.goals));
    }

    lines.push(String::new());
    lines.push("  PLAYERS BY POSITION".to_string());
    for (position, names) in &summary.names_by_position {
        lines.push(format!("    {}: {}", labels.label(*position), names.join(", ")));
    }

    lines.push(String::new());
    lines.push("  PLAYERS BY COUNTRY".to_string());
    let distribution = &summary.nationality_distribution;
    for (key, count) in distribution.ranked() {
        let percentage = distribution.share(key);
        let label = if key.is_empty() { UNKNOWN_BUCKET_LABEL } else { key };
        let bar = "█".repeat((percentage / 2.0) as usize);
        lines.push(format!("    {:<20} {:>5} {:>5.1}% {}", label, count, percentage, bar));
    }

    lines.join("\n")
}
