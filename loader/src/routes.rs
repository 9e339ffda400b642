use std::path::Path;

use aggregator::types::RouteRecord;
use csv::StringRecord;

use crate::error::LoaderError;

/// Reads the routes CSV into a collection of records.
///
/// Only decoding and column splitting happen here: values are kept as text
/// and a column absent from the header leaves the matching field `None`,
/// for the aggregators to reject if they need it. Rows shorter than the
/// header leave their trailing fields `None` the same way.
pub fn load_routes(path: &Path) -> Result<Vec<RouteRecord>, LoaderError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = Columns::from_headers(reader.headers()?);

    let mut routes = Vec::new();
    for row in reader.records() {
        let row = row?;
        routes.push(columns.to_route(&row));
    }

    Ok(routes)
}

/// Positions of the known columns in this file's header.
struct Columns {
    airline_id: Option<usize>,
    airline_name: Option<usize>,
    source_airport_id: Option<usize>,
    source_airport: Option<usize>,
    source_latitude: Option<usize>,
    source_longitude: Option<usize>,
    source_city: Option<usize>,
    source_country: Option<usize>,
    dest_airport_id: Option<usize>,
    dest_airport: Option<usize>,
    dest_latitude: Option<usize>,
    dest_longitude: Option<usize>,
    dest_city: Option<usize>,
    dest_country: Option<usize>,
    id: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|header| header == name);

        Columns {
            airline_id: find("AirlineID"),
            airline_name: find("AirlineName"),
            source_airport_id: find("SourceAirportID"),
            source_airport: find("SourceAirport"),
            source_latitude: find("SourceLatitude"),
            source_longitude: find("SourceLongitude"),
            source_city: find("SourceCity"),
            source_country: find("SourceCountry"),
            dest_airport_id: find("DestAirportID"),
            dest_airport: find("DestAirport"),
            dest_latitude: find("DestLatitude"),
            dest_longitude: find("DestLongitude"),
            dest_city: find("DestCity"),
            dest_country: find("DestCountry"),
            id: find("ID"),
        }
    }

    fn to_route(&self, row: &StringRecord) -> RouteRecord {
        let get = |column: Option<usize>| {
            column
                .and_then(|index| row.get(index))
                .map(str::to_string)
        };

        RouteRecord {
            airline_id: get(self.airline_id),
            airline_name: get(self.airline_name),
            source_airport_id: get(self.source_airport_id),
            source_airport: get(self.source_airport),
            source_latitude: get(self.source_latitude),
            source_longitude: get(self.source_longitude),
            source_city: get(self.source_city),
            source_country: get(self.source_country),
            dest_airport_id: get(self.dest_airport_id),
            dest_airport: get(self.dest_airport),
            dest_latitude: get(self.dest_latitude),
            dest_longitude: get(self.dest_longitude),
            dest_city: get(self.dest_city),
            dest_country: get(self.dest_country),
            id: get(self.id),
        }
    }
}
