mod airline_summary;
pub use airline_summary::AirlineSummary;

mod airport_summary;
pub use airport_summary::AirportSummary;

mod route;
pub use route::RouteRecord;
