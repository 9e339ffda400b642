pub mod datasets;
pub mod error;
pub mod routes;
pub mod world;

pub use datasets::{load_datasets, Datasets};
pub use error::LoaderError;
pub use routes::load_routes;
pub use world::{load_world, CountryFeature, WorldMap};
