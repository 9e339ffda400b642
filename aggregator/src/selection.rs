use crate::types::RouteRecord;

/// Selects the routes operated by one airline, in input order, for the map
/// renderer to draw as route lines while that airline is highlighted.
///
/// An unknown airline id selects nothing; records whose airline id column is
/// absent never match. Passing an empty id returns the routes grouped under
/// the empty key, which doubles as "clear the highlight" when the data has
/// no such key.
pub fn routes_for_airline<'a>(
    routes: &'a [RouteRecord],
    airline_id: &str,
) -> Vec<&'a RouteRecord> {
    routes
        .iter()
        .filter(|route| route.airline_id.as_deref() == Some(airline_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(airline_id: &str, id: &str) -> RouteRecord {
        RouteRecord {
            airline_id: Some(airline_id.to_string()),
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_selects_only_the_requested_airline_in_input_order() {
        let routes = vec![route("AA", "1"), route("DL", "2"), route("AA", "3")];

        let selected = routes_for_airline(&routes, "AA");
        let ids: Vec<&str> = selected
            .iter()
            .filter_map(|r| r.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_airline_selects_nothing() {
        let routes = vec![route("AA", "1")];
        assert!(routes_for_airline(&routes, "UA").is_empty());
    }

    #[test]
    fn test_records_without_the_airline_column_never_match() {
        let routes = vec![RouteRecord::default()];
        assert!(routes_for_airline(&routes, "").is_empty());
    }
}
