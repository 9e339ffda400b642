/// One row of the routes file: a single flight route between two airports,
/// operated by one airline.
///
/// Every column is carried as it came out of the file, as optional text. A
/// `None` means the column was absent from the header, which the aggregators
/// report as a missing field when they need it; coordinates stay textual
/// until the airport aggregator parses them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteRecord {
    pub airline_id: Option<String>,
    pub airline_name: Option<String>,
    pub source_airport_id: Option<String>,
    pub source_airport: Option<String>,
    pub source_latitude: Option<String>,
    pub source_longitude: Option<String>,
    pub source_city: Option<String>,
    pub source_country: Option<String>,
    pub dest_airport_id: Option<String>,
    pub dest_airport: Option<String>,
    pub dest_latitude: Option<String>,
    pub dest_longitude: Option<String>,
    pub dest_city: Option<String>,
    pub dest_country: Option<String>,
    pub id: Option<String>,
}
