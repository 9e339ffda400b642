use std::collections::HashMap;

use crate::error::{required, AggregateError};
use crate::types::{AirlineSummary, RouteRecord};

/// Groups route records by airline, counting how many routes each airline
/// operates, and returns the summaries ordered for the bar chart.
///
/// The first record seen for an airline id fixes the name carried into its
/// summary; if later records disagree on the name they are counted but their
/// name is ignored. An empty airline id is a key like any other. The result
/// is sorted by descending count, ties broken by ascending airline id so
/// two runs over the same data order the bars the same way.
pub fn group_by_airline(routes: &[RouteRecord]) -> Result<Vec<AirlineSummary>, AggregateError> {
    let mut groups: HashMap<String, AirlineSummary> = HashMap::new();

    for (record, route) in routes.iter().enumerate() {
        let airline_id = required(&route.airline_id, record, "AirlineID")?;
        let airline_name = required(&route.airline_name, record, "AirlineName")?;

        match groups.get_mut(airline_id) {
            Some(summary) => summary.count += 1,
            None => {
                groups.insert(
                    airline_id.to_string(),
                    AirlineSummary::new(airline_id.to_string(), airline_name.to_string(), 1),
                );
            }
        }
    }

    let mut summaries: Vec<AirlineSummary> = groups.into_values().collect();
    summaries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.airline_id.cmp(&b.airline_id))
    });

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(airline_id: &str, airline_name: &str) -> RouteRecord {
        RouteRecord {
            airline_id: Some(airline_id.to_string()),
            airline_name: Some(airline_name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(group_by_airline(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_counts_and_order_for_two_airlines() {
        let routes = vec![
            route("AA", "American"),
            route("DL", "Delta"),
            route("AA", "American"),
        ];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        assert_eq!(
            summaries,
            vec![
                AirlineSummary::new("AA".to_string(), "American".to_string(), 2),
                AirlineSummary::new("DL".to_string(), "Delta".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_first_record_fixes_the_airline_name() {
        let routes = vec![route("AA", "American"), route("AA", "American Airlines")];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].airline_name, "American");
        assert_eq!(summaries[0].count, 2);
    }

    #[test]
    fn test_ties_are_broken_by_airline_id() {
        let routes = vec![
            route("UA", "United"),
            route("AA", "American"),
            route("DL", "Delta"),
        ];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        let ids: Vec<&str> = summaries.iter().map(|s| s.airline_id.as_str()).collect();
        assert_eq!(ids, vec!["AA", "DL", "UA"]);
    }

    #[test]
    fn test_counts_sum_to_the_number_of_records() {
        let routes = vec![
            route("AA", "American"),
            route("DL", "Delta"),
            route("AA", "American"),
            route("UA", "United"),
            route("DL", "Delta"),
        ];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        let total: usize = summaries.iter().map(|s| s.count).sum();
        assert_eq!(total, routes.len());
    }

    #[test]
    fn test_every_airline_appears_exactly_once() {
        let routes = vec![
            route("AA", "American"),
            route("DL", "Delta"),
            route("AA", "American"),
        ];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        let mut ids: Vec<&str> = summaries.iter().map(|s| s.airline_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), summaries.len());
        assert!(ids.contains(&"AA"));
        assert!(ids.contains(&"DL"));
    }

    #[test]
    fn test_output_is_sorted_non_increasing_by_count() {
        let routes = vec![
            route("AA", "American"),
            route("DL", "Delta"),
            route("AA", "American"),
            route("UA", "United"),
            route("UA", "United"),
            route("UA", "United"),
        ];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        for pair in summaries.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let routes = vec![route("AA", "American"), route("DL", "Delta")];

        let first = group_by_airline(&routes).expect("aggregation failed");
        let second = group_by_airline(&routes).expect("aggregation failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_airline_id_is_grouped_like_any_other_key() {
        let routes = vec![route("", "Unknown"), route("", "Unknown")];

        let summaries = group_by_airline(&routes).expect("aggregation failed");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].airline_id, "");
        assert_eq!(summaries[0].count, 2);
    }

    #[test]
    fn test_absent_airline_id_column_fails() {
        let routes = vec![
            route("AA", "American"),
            RouteRecord {
                airline_name: Some("Mystery Air".to_string()),
                ..Default::default()
            },
        ];

        assert_eq!(
            group_by_airline(&routes),
            Err(AggregateError::MissingField {
                record: 1,
                field: "AirlineID"
            })
        );
    }
}
