use std::fmt;
use std::path::PathBuf;

use aggregator::types::{AirlineSummary, AirportSummary, RouteRecord};
use aggregator::{group_by_airline, group_by_airport, routes_for_airline, AggregateError};
use loader::{load_datasets, Datasets, LoaderError, WorldMap};
use logger::{Color, Logger, LoggerError};

/// Where the dashboard finds its inputs and where it writes its log.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub routes_path: PathBuf,
    pub world_path: PathBuf,
    pub log_dir: PathBuf,
}

/// Everything a renderer needs to draw the dashboard: the chart rows per
/// airline, the airport markers, the raw routes for highlighting route
/// lines, and the world geometry behind them.
///
/// Built once per process by [`Dashboard::load`]; the summaries are plain
/// derived values, so refreshing the dashboard means loading again.
pub struct Dashboard {
    routes: Vec<RouteRecord>,
    pub airlines: Vec<AirlineSummary>,
    pub airports: Vec<AirportSummary>,
    pub world: WorldMap,
}

impl Dashboard {
    /// Loads both input files concurrently, waits for both, then aggregates.
    ///
    /// Any failure, in the loads or in the aggregation, is written to the
    /// log and aborts the whole sequence; there is no partial dashboard.
    pub fn load(config: &DashboardConfig) -> Result<Dashboard, DashboardError> {
        let logger = Logger::new(&config.log_dir, "dashboard")?;

        let Datasets { routes, world } =
            load_datasets(&config.routes_path, &config.world_path, &logger)?;

        let airlines = match group_by_airline(&routes) {
            Ok(airlines) => airlines,
            Err(error) => return abort(&logger, error),
        };
        let airports = match group_by_airport(&routes) {
            Ok(airports) => airports,
            Err(error) => return abort(&logger, error),
        };

        let _ = logger.info(
            &format!(
                "Aggregated {} routes into {} airlines and {} airports",
                routes.len(),
                airlines.len(),
                airports.len()
            ),
            Color::Green,
            false,
        );

        Ok(Dashboard {
            routes,
            airlines,
            airports,
            world,
        })
    }

    /// The raw route records, in file order.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// The routes operated by one airline, for highlighting on the map.
    pub fn routes_for_airline(&self, airline_id: &str) -> Vec<&RouteRecord> {
        routes_for_airline(&self.routes, airline_id)
    }
}

fn abort(logger: &Logger, error: AggregateError) -> Result<Dashboard, DashboardError> {
    let _ = logger.error(&format!("Aggregation failed: {}", error), true);
    Err(DashboardError::Aggregate(error))
}

/// Represents errors that can occur while assembling the dashboard.
#[derive(Debug)]
pub enum DashboardError {
    Load(LoaderError),
    Aggregate(AggregateError),
    Logger(LoggerError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Load(e) => write!(f, "Failed to load the input files: {}", e),
            DashboardError::Aggregate(e) => write!(f, "Failed to aggregate the routes: {}", e),
            DashboardError::Logger(e) => write!(f, "Failed to set up logging: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Load(e) => Some(e),
            DashboardError::Aggregate(e) => Some(e),
            DashboardError::Logger(e) => Some(e),
        }
    }
}

impl From<LoaderError> for DashboardError {
    fn from(err: LoaderError) -> Self {
        DashboardError::Load(err)
    }
}

impl From<AggregateError> for DashboardError {
    fn from(err: AggregateError) -> Self {
        DashboardError::Aggregate(err)
    }
}

impl From<LoggerError> for DashboardError {
    fn from(err: LoggerError) -> Self {
        DashboardError::Logger(err)
    }
}
