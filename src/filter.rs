//! Narrowing career statistics to a single match format.

use crate::model::{CareerStats, Format, PlayerStats};

/// Keep only the rows of `stats` whose label denotes `format`.
///
/// `None` returns the statistics unchanged. A format the player has no record
/// in yields an empty table rather than an error.
///
/// ```
/// use std::collections::BTreeMap;
/// use cricket_scraper::{filter_by_format, CareerStats, Format, StatValue};
///
/// let mut stats = BTreeMap::new();
/// for label in ["Test", "ODI", "T20I", "IPL"] {
///     stats.insert(
///         label.to_string(),
///         BTreeMap::from([("matches".to_string(), StatValue::Int(10))]),
///     );
/// }
/// let t20 = filter_by_format(CareerStats(stats), Some(Format::T20));
/// assert_eq!(t20.labels().collect::<Vec<_>>(), vec!["T20I"]);
/// ```
pub fn filter_by_format(stats: CareerStats, format: Option<Format>) -> CareerStats {
    match format {
        None => stats,
        Some(format) => CareerStats(
            stats
                .0
                .into_iter()
                .filter(|(label, _)| format.matches_label(label))
                .collect(),
        ),
    }
}

impl PlayerStats {
    /// Apply [`filter_by_format`] to both the batting and bowling tables.
    pub fn filter_by_format(self, format: Option<Format>) -> PlayerStats {
        PlayerStats {
            batting: filter_by_format(self.batting, format),
            bowling: filter_by_format(self.bowling, format),
            format,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use itertools::Itertools;

    use super::*;
    use crate::model::{PlayerProfile, PlayerRankings, StatValue};

    fn career(labels: &[&str]) -> CareerStats {
        CareerStats(
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    (
                        label.to_string(),
                        BTreeMap::from([("matches".to_string(), StatValue::Int(i as i64 + 1))]),
                    )
                })
                .collect(),
        )
    }

    fn player() -> PlayerStats {
        PlayerStats {
            profile: PlayerProfile {
                name: "Virat Kohli".to_string(),
                country: Some("India".to_string()),
                role: None,
                image_url: None,
                profile_url: "https://www.cricbuzz.com/profiles/1413/virat-kohli".to_string(),
                born: None,
                birth_place: None,
                batting_style: None,
                bowling_style: None,
            },
            rankings: PlayerRankings::default(),
            batting: career(&["Test", "ODI", "T20", "IPL"]),
            bowling: career(&["Test", "ODI"]),
            format: None,
        }
    }

    #[test]
    fn test_no_format_is_unchanged() {
        let stats = career(&["Test", "ODI"]);
        assert_eq!(filter_by_format(stats.clone(), None), stats);
    }

    #[test]
    fn test_keeps_only_requested_format() {
        let filtered = filter_by_format(career(&["Test", "ODI", "T20", "IPL"]), Some(Format::Odi));
        assert_eq!(filtered.labels().collect_vec(), vec!["ODI"]);
        assert_eq!(
            filtered.get(Format::Odi).and_then(|line| line.get("matches")),
            Some(&StatValue::Int(2))
        );
    }

    #[test]
    fn test_absent_format_is_empty() {
        let filtered = filter_by_format(career(&["Test", "ODI"]), Some(Format::T20));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_player_stats() {
        let stats = player().filter_by_format(Some(Format::T20));
        assert_eq!(stats.format, Some(Format::T20));
        assert_eq!(stats.batting.labels().collect_vec(), vec!["T20"]);
        assert!(stats.bowling.is_empty());
        assert_eq!(stats.profile.name, "Virat Kohli");
    }
}
