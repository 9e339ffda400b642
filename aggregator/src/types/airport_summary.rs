/// Aggregated count of route endpoints for one airport, with the identity
/// fields a map renderer needs to place the marker.
///
/// The identity fields (name, coordinates, city, country) come from the
/// first touch that saw the airport, in either role; later touches only
/// increase the count.
#[derive(Clone, Debug, PartialEq)]
pub struct AirportSummary {
    pub airport_id: String,
    pub airport: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    pub count: usize,
}
