pub mod airline;
pub mod airport;
pub mod error;
pub mod selection;
pub mod types;

pub use airline::group_by_airline;
pub use airport::group_by_airport;
pub use error::AggregateError;
pub use selection::routes_for_airline;
