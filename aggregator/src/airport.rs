use std::collections::HashMap;

use crate::error::{required, AggregateError};
use crate::types::{AirportSummary, RouteRecord};

/// The column names behind one endpoint of a route, used for error reporting.
struct EndpointColumns {
    airport_id: &'static str,
    airport: &'static str,
    latitude: &'static str,
    longitude: &'static str,
    city: &'static str,
    country: &'static str,
}

const DEST_COLUMNS: EndpointColumns = EndpointColumns {
    airport_id: "DestAirportID",
    airport: "DestAirport",
    latitude: "DestLatitude",
    longitude: "DestLongitude",
    city: "DestCity",
    country: "DestCountry",
};

const SOURCE_COLUMNS: EndpointColumns = EndpointColumns {
    airport_id: "SourceAirportID",
    airport: "SourceAirport",
    latitude: "SourceLatitude",
    longitude: "SourceLongitude",
    city: "SourceCity",
    country: "SourceCountry",
};

/// Groups route endpoints by airport, counting how many times each airport
/// appears as the source or the destination of a route.
///
/// Every record contributes two touches, destination first, then source. A
/// touch creates the airport's summary on first sight, seeding the identity
/// fields from its own columns, and then increments the count; because the
/// key is role-independent, a hub touched in both roles accumulates into a
/// single entry. Identity fields are first-touch-wins and never updated
/// afterwards. Coordinates are parsed here, and a non-numeric value fails
/// the whole aggregation. The output carries no ordering guarantee.
pub fn group_by_airport(routes: &[RouteRecord]) -> Result<Vec<AirportSummary>, AggregateError> {
    let mut groups: HashMap<String, AirportSummary> = HashMap::new();

    for (record, route) in routes.iter().enumerate() {
        touch_destination(&mut groups, route, record)?;
        touch_source(&mut groups, route, record)?;
    }

    Ok(groups.into_values().collect())
}

fn touch_destination(
    groups: &mut HashMap<String, AirportSummary>,
    route: &RouteRecord,
    record: usize,
) -> Result<(), AggregateError> {
    touch(
        groups,
        record,
        &DEST_COLUMNS,
        &route.dest_airport_id,
        &route.dest_airport,
        &route.dest_latitude,
        &route.dest_longitude,
        &route.dest_city,
        &route.dest_country,
    )
}

fn touch_source(
    groups: &mut HashMap<String, AirportSummary>,
    route: &RouteRecord,
    record: usize,
) -> Result<(), AggregateError> {
    touch(
        groups,
        record,
        &SOURCE_COLUMNS,
        &route.source_airport_id,
        &route.source_airport,
        &route.source_latitude,
        &route.source_longitude,
        &route.source_city,
        &route.source_country,
    )
}

#[allow(clippy::too_many_arguments)]
fn touch(
    groups: &mut HashMap<String, AirportSummary>,
    record: usize,
    columns: &EndpointColumns,
    airport_id: &Option<String>,
    airport: &Option<String>,
    latitude: &Option<String>,
    longitude: &Option<String>,
    city: &Option<String>,
    country: &Option<String>,
) -> Result<(), AggregateError> {
    let airport_id = required(airport_id, record, columns.airport_id)?;

    match groups.get_mut(airport_id) {
        Some(summary) => summary.count += 1,
        None => {
            let summary = AirportSummary {
                airport_id: airport_id.to_string(),
                airport: required(airport, record, columns.airport)?.to_string(),
                latitude: parse_coordinate(latitude, record, columns.latitude)?,
                longitude: parse_coordinate(longitude, record, columns.longitude)?,
                city: required(city, record, columns.city)?.to_string(),
                country: required(country, record, columns.country)?.to_string(),
                count: 1,
            };
            groups.insert(airport_id.to_string(), summary);
        }
    }

    Ok(())
}

fn parse_coordinate(
    value: &Option<String>,
    record: usize,
    field: &'static str,
) -> Result<f64, AggregateError> {
    let text = required(value, record, field)?;
    text.trim()
        .parse()
        .map_err(|_| AggregateError::InvalidCoordinate {
            record,
            field,
            value: text.to_string(),
        })
}
