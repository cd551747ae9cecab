//! Label → count distributions over a categorical player field.
//!
//! A [`Distribution`] is what the pie chart renders and what the report
//! stores as the nationality breakdown.

use crate::model::Player;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence count per distinct label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: BTreeMap<String, u64>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `label`
    pub fn record(&mut self, label: &str) {
        if let Some(count) = self.counts.get_mut(label) {
            *count += 1;
        } else {
            self.counts.insert(label.to_string(), 1);
        }
    }

    /// Count for a label, `0` if it never occurred
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Percentage of the total held by `label`
    pub fn share(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            (self.get(label) as f64 / total as f64) * 100.0
        }
    }

    /// Entries in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Entries sorted by count (descending), then label (ascending)
    ///
    /// **Public** - slice order for charts and summaries
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<'a> FromIterator<&'a str> for Distribution {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut distribution = Distribution::new();
        for label in iter {
            distribution.record(label);
        }
        distribution
    }
}

/// Build a distribution keyed by an arbitrary player field
///
/// **Public** - generic mapper behind [`nationality_distribution`]
///
/// # Arguments
/// * `players` - Roster to scan (`None` gives an empty distribution)
/// * `key` - Extracts the bucket label from a player
pub fn distribution_by<F>(players: Option<&[Player]>, key: F) -> Distribution
where
    F: Fn(&Player) -> &str,
{
    let distribution: Distribution = players.unwrap_or_default().iter().map(key).collect();
    debug!(
        "Built distribution with {} buckets over {} players",
        distribution.len(),
        distribution.total()
    );
    distribution
}

/// Players per nationality
///
/// Missing and empty nationalities share the `""` bucket. Labels are
/// case-sensitive.
pub fn nationality_distribution(players: Option<&[Player]>) -> Distribution {
    distribution_by(players, Player::nationality_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn national(nationality: Option<&str>) -> Player {
        let player = Player::new("p", "t", Position::Forward, 1000, 10, 3);
        match nationality {
            Some(n) => player.with_nationality(n),
            None => player,
        }
    }

    #[test]
    fn test_absent_and_empty_share_a_bucket() {
        let players = vec![national(None), national(Some("")), national(Some("Russia"))];
        let dist = nationality_distribution(Some(&players));

        assert_eq!(dist.len(), 2);
        assert_eq!(dist.get(""), 2);
        assert_eq!(dist.get("Russia"), 1);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let players = vec![
            national(Some("Russia")),
            national(Some("russia")),
            national(Some("RUSSIA")),
        ];
        let dist = nationality_distribution(Some(&players));
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_empty_roster() {
        assert!(nationality_distribution(Some(&[][..])).is_empty());
        assert!(nationality_distribution(None).is_empty());
        assert_eq!(Distribution::new().share("anything"), 0.0);
    }

    #[test]
    fn test_share_and_ranked() {
        let players = vec![
            national(Some("USA")),
            national(Some("Russia")),
            national(Some("Russia")),
            national(Some("Brazil")),
        ];
        let dist = nationality_distribution(Some(&players));

        assert_eq!(dist.share("Russia"), 50.0);
        assert_eq!(dist.ranked(), vec![("Russia", 2), ("Brazil", 1), ("USA", 1)]);
    }

    #[test]
    fn test_distribution_by_team() {
        let players = vec![
            Player::new("a", "Bulldogs", Position::Forward, 0, 0, 0),
            Player::new("b", "Bulldogs", Position::Defender, 0, 0, 0),
        ];
        let dist = distribution_by(Some(&players), |p| p.team.as_str());
        assert_eq!(dist.get("Bulldogs"), 2);
    }
}
