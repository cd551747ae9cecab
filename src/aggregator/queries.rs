//! Analytical queries over a player roster.
//!
//! Every query is a pure function of the roster it is given. `None` stands
//! for "no roster supplied" and yields the same result as an empty roster.
//!
//! Queries that pick a winner out of a group (fewest players, highest
//! average) use a total comparator with the group key as the last resort,
//! so the answer never depends on hash map iteration order.

use crate::model::{Player, Position, PositionLabels};
use crate::utils::config::{GERMAN_NATIONALITY, TOP_TEAMS_LIMIT};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Total goals scored by one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGoals {
    pub team: String,
    pub goals: u64,
}

impl TeamGoals {
    pub fn new(team: impl Into<String>, goals: u64) -> Self {
        Self {
            team: team.into(),
            goals,
        }
    }
}

/// Resolve an optional roster to a slice
fn roster(players: Option<&[Player]>) -> &[Player] {
    players.unwrap_or_default()
}

/// Count players without an agency (absent or empty)
pub fn count_without_agency(players: Option<&[Player]>) -> usize {
    roster(players).iter().filter(|p| !p.has_agency()).count()
}

/// Highest goal tally among defenders, `0` when there are none
pub fn max_defender_goals(players: Option<&[Player]>) -> u32 {
    roster(players)
        .iter()
        .filter(|p| p.position == Position::Defender)
        .map(|p| p.goals)
        .max()
        .unwrap_or(0)
}

/// Most expensive player of the given nationality
///
/// **Public** - general form of the German-player query
///
/// # Arguments
/// * `players` - Roster to search
/// * `nationality` - Exact, case-sensitive nationality to match
///
/// # Returns
/// The player with the highest `transfer_cost`. When several players share
/// that cost, the first one in roster order wins.
pub fn most_expensive_player_from<'a>(
    players: Option<&'a [Player]>,
    nationality: &str,
) -> Option<&'a Player> {
    roster(players)
        .iter()
        .filter(|p| p.nationality.as_deref() == Some(nationality))
        .fold(None, |best: Option<&Player>, candidate| match best {
            Some(current) if current.transfer_cost >= candidate.transfer_cost => Some(current),
            _ => Some(candidate),
        })
}

/// Display label of the most expensive German player's position
pub fn most_expensive_german_player_position(
    players: Option<&[Player]>,
    labels: &PositionLabels,
) -> Option<String> {
    let player = most_expensive_player_from(players, GERMAN_NATIONALITY)?;
    debug!(
        "Most expensive {} player: {} ({})",
        GERMAN_NATIONALITY, player.name, player.transfer_cost
    );
    Some(labels.label(player.position).to_string())
}

/// Player names grouped by position
///
/// Names keep roster order inside each group. Positions nobody plays are
/// left out.
pub fn group_names_by_position(players: Option<&[Player]>) -> BTreeMap<Position, Vec<String>> {
    let mut groups: BTreeMap<Position, Vec<String>> = BTreeMap::new();
    for player in roster(players) {
        groups
            .entry(player.position)
            .or_default()
            .push(player.name.clone());
    }
    groups
}

/// Set of team names present in the roster
pub fn distinct_teams(players: Option<&[Player]>) -> BTreeSet<String> {
    roster(players).iter().map(|p| p.team.clone()).collect()
}

/// Teams ranked by total goals
///
/// **Public** - general form of the top-5 leaderboard
///
/// # Arguments
/// * `players` - Roster to rank
/// * `limit` - Maximum number of teams returned
///
/// # Returns
/// Up to `limit` teams sorted by goals (descending), ties by team name
/// (ascending)
pub fn top_teams_by_goals(players: Option<&[Player]>, limit: usize) -> Vec<TeamGoals> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for player in roster(players) {
        *totals.entry(player.team.as_str()).or_insert(0) += u64::from(player.goals);
    }

    let mut ranked: Vec<TeamGoals> = totals
        .into_iter()
        .map(|(team, goals)| TeamGoals::new(team, goals))
        .collect();

    ranked.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.team.cmp(&b.team)));
    ranked.truncate(limit);

    debug!("Ranked {} teams by goals", ranked.len());
    ranked
}

/// The five highest-scoring teams
pub fn top5_teams_by_goals(players: Option<&[Player]>) -> Vec<TeamGoals> {
    top_teams_by_goals(players, TOP_TEAMS_LIMIT)
}

/// Agency credited with the fewest players
///
/// Players without an agency are ignored. Ties go to the agency whose name
/// sorts first.
pub fn agency_with_fewest_players(players: Option<&[Player]>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for player in roster(players).iter().filter(|p| p.has_agency()) {
        if let Some(agency) = player.agency.as_deref() {
            *counts.entry(agency).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(agency, _)| agency.to_string())
}

/// Running red card total for one team
#[derive(Debug, Clone, Copy, Default)]
struct RedCardTally {
    cards: u64,
    players: u64,
}

impl RedCardTally {
    /// Compare averages exactly: a/b vs c/d as a*d vs c*b
    fn cmp_average(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.cards) * u128::from(other.players);
        let rhs = u128::from(other.cards) * u128::from(self.players);
        lhs.cmp(&rhs)
    }

    fn average(&self) -> f64 {
        if self.players == 0 {
            0.0
        } else {
            self.cards as f64 / self.players as f64
        }
    }
}

fn red_card_tallies(players: &[Player]) -> HashMap<&str, RedCardTally> {
    let mut tallies: HashMap<&str, RedCardTally> = HashMap::new();
    for player in players {
        let tally = tallies.entry(player.team.as_str()).or_default();
        tally.cards += u64::from(player.red_cards);
        tally.players += 1;
    }
    tallies
}

/// Average red cards per player for every team
pub fn team_red_card_averages(players: Option<&[Player]>) -> BTreeMap<String, f64> {
    red_card_tallies(roster(players))
        .into_iter()
        .map(|(team, tally)| (team.to_string(), tally.average()))
        .collect()
}

/// Team with the highest average red cards per player
///
/// Returns an empty string for an empty roster. Ties go to the team whose
/// name sorts first.
pub fn rudest_team_by_average_red_cards(players: Option<&[Player]>) -> String {
    red_card_tallies(roster(players))
        .into_iter()
        .max_by(|a, b| a.1.cmp_average(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(team, _)| team.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn player(name: &str, team: &str, position: Position) -> Player {
        Player::new(name, team, position, 0, 0, 0)
    }

    fn scorer(team: &str, goals: u32) -> Player {
        Player::new("p", team, Position::Forward, 0, goals, 0)
    }

    fn carded(team: &str, red_cards: u32) -> Player {
        Player::new("p", team, Position::Defender, 0, 0, red_cards)
    }

    fn german(name: &str, position: Position, cost: u64) -> Player {
        Player::new(name, "Bayern", position, cost, 0, 0).with_nationality("Germany")
    }

    fn represented(agency: Option<&str>) -> Player {
        let p = player("p", "t", Position::Midfield);
        match agency {
            Some(a) => p.with_agency(a),
            None => p,
        }
    }

    #[test]
    fn test_count_without_agency() {
        let players = vec![
            represented(Some("")),
            represented(None),
            represented(Some("Agency")),
            represented(Some("")),
        ];
        assert_eq!(count_without_agency(Some(&players)), 3);
        assert_eq!(count_without_agency(Some(&[][..])), 0);
        assert_eq!(count_without_agency(None), 0);
    }

    #[test]
    fn test_max_defender_goals() {
        let players = vec![
            Player::new("a", "t", Position::Defender, 0, 10, 0),
            Player::new("b", "t", Position::Defender, 0, 15, 0),
            Player::new("c", "t", Position::Forward, 0, 40, 0),
        ];
        assert_eq!(max_defender_goals(Some(&players)), 15);
        assert_eq!(max_defender_goals(Some(&players[2..])), 0);
        assert_eq!(max_defender_goals(None), 0);
    }

    #[test]
    fn test_most_expensive_german_picks_highest_cost() {
        let players = vec![
            german("p1", Position::Forward, 3000),
            german("p2", Position::Defender, 5000),
            german("p3", Position::Midfield, 4000),
        ];
        let labels = PositionLabels::russian();
        assert_eq!(
            most_expensive_german_player_position(Some(&players), &labels),
            Some("Защитник".to_string())
        );
    }

    #[test]
    fn test_most_expensive_german_tie_keeps_first() {
        let players = vec![
            german("p1", Position::Forward, 5000),
            german("p2", Position::Defender, 5000),
        ];
        let labels = PositionLabels::english();
        assert_eq!(
            most_expensive_german_player_position(Some(&players), &labels),
            Some("Forward".to_string())
        );
    }

    #[test]
    fn test_most_expensive_german_is_case_sensitive() {
        let players = vec![
            Player::new("a", "t", Position::Forward, 9000, 0, 0).with_nationality("germany"),
            Player::new("b", "t", Position::Forward, 9000, 0, 0),
        ];
        let labels = PositionLabels::english();
        assert_eq!(most_expensive_german_player_position(Some(&players), &labels), None);
        assert_eq!(most_expensive_german_player_position(None, &labels), None);
    }

    #[test]
    fn test_group_names_by_position_keeps_order() {
        let players = vec![
            player("Ivan", "a", Position::Forward),
            player("Sergey", "a", Position::Defender),
            player("Petr", "b", Position::Forward),
        ];
        let groups = group_names_by_position(Some(&players));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Position::Forward], vec!["Ivan", "Petr"]);
        assert_eq!(groups[&Position::Defender], vec!["Sergey"]);
        assert!(!groups.contains_key(&Position::Goalkeeper));
    }

    #[test]
    fn test_distinct_teams() {
        let players = vec![
            player("a", "Bulldogs", Position::Forward),
            player("b", "Corgis", Position::Forward),
            player("c", "Bulldogs", Position::Forward),
        ];
        let teams = distinct_teams(Some(&players));
        assert_eq!(teams.len(), 2);
        assert!(teams.contains("Bulldogs"));
        assert!(teams.contains("Corgis"));
    }

    #[test]
    fn test_top5_teams_by_goals_breaks_ties_by_name() {
        let players = vec![
            scorer("TeamA", 10),
            scorer("TeamA", 15),
            scorer("TeamB", 20),
            scorer("TeamB", 5),
            scorer("TeamC", 30),
            scorer("TeamD", 8),
            scorer("TeamE", 12),
            scorer("TeamF", 3),
        ];

        let top = top5_teams_by_goals(Some(&players));

        assert_eq!(
            top,
            vec![
                TeamGoals::new("TeamC", 30),
                TeamGoals::new("TeamA", 25),
                TeamGoals::new("TeamB", 25),
                TeamGoals::new("TeamE", 12),
                TeamGoals::new("TeamD", 8),
            ]
        );
    }

    #[test]
    fn test_top_teams_with_fewer_teams_than_limit() {
        let players = vec![scorer("Solo", 2)];
        assert_eq!(top_teams_by_goals(Some(&players), 5), vec![TeamGoals::new("Solo", 2)]);
        assert!(top_teams_by_goals(Some(&players), 0).is_empty());
    }

    #[test]
    fn test_agency_with_fewest_players() {
        let players = vec![
            represented(Some("Agency1")),
            represented(Some("Agency1")),
            represented(Some("Agency2")),
            represented(Some("Agency2")),
            represented(Some("Agency2")),
            represented(Some("Agency3")),
            represented(Some("Agency4")),
        ];
        // Agency3 and Agency4 both have one player
        assert_eq!(agency_with_fewest_players(Some(&players)), Some("Agency3".to_string()));
    }

    #[test]
    fn test_agency_with_fewest_players_ignores_unrepresented() {
        let players = vec![
            represented(None),
            represented(Some("")),
            represented(None),
            represented(Some("")),
        ];
        assert_eq!(agency_with_fewest_players(Some(&players)), None);
        assert_eq!(agency_with_fewest_players(None), None);
    }

    #[test]
    fn test_rudest_team() {
        let players = vec![
            carded("TeamA", 2),
            carded("TeamA", 1),
            carded("TeamB", 3),
            carded("TeamB", 1),
            carded("TeamC", 0),
        ];
        assert_eq!(rudest_team_by_average_red_cards(Some(&players)), "TeamB");
    }

    #[test]
    fn test_rudest_team_tie_goes_to_first_name() {
        // 1/2 == 2/4
        let players = vec![
            carded("Zebras", 1),
            carded("Zebras", 0),
            carded("Ants", 2),
            carded("Ants", 0),
            carded("Ants", 0),
            carded("Ants", 0),
        ];
        assert_eq!(rudest_team_by_average_red_cards(Some(&players)), "Ants");
        assert_eq!(rudest_team_by_average_red_cards(None), "");
    }

    #[test]
    fn test_team_red_card_averages() {
        let players = vec![carded("TeamA", 2), carded("TeamA", 1), carded("TeamB", 0)];
        let averages = team_red_card_averages(Some(&players));
        assert_eq!(averages["TeamA"], 1.5);
        assert_eq!(averages["TeamB"], 0.0);
    }
}
