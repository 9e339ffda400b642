/// Aggregated count of routes for one airline.
#[derive(Clone, Debug, PartialEq)]
pub struct AirlineSummary {
    pub airline_id: String,
    pub airline_name: String,
    pub count: usize,
}

impl AirlineSummary {
    pub fn new(airline_id: String, airline_name: String, count: usize) -> Self {
        AirlineSummary {
            airline_id,
            airline_name,
            count,
        }
    }
}
