use std::path::Path;
use std::sync::mpsc;

use aggregator::types::RouteRecord;
use logger::{Color, Logger};
use threadpool::ThreadPool;

use crate::error::LoaderError;
use crate::routes::load_routes;
use crate::world::{load_world, WorldMap};

/// The two datasets the dashboard needs before anything can be drawn.
pub struct Datasets {
    pub routes: Vec<RouteRecord>,
    pub world: WorldMap,
}

enum Loaded {
    Routes(Result<Vec<RouteRecord>, LoaderError>),
    World(Result<WorldMap, LoaderError>),
}

/// Loads the routes file and the world file concurrently, then waits for
/// both before returning.
///
/// This is a plain wait-for-all join: no retry, no timeout, no partial
/// results. Either failure is written to the log and aborts the load, and
/// with it everything downstream.
pub fn load_datasets(
    routes_path: &Path,
    world_path: &Path,
    logger: &Logger,
) -> Result<Datasets, LoaderError> {
    let pool = ThreadPool::new(2);
    let (sender, receiver) = mpsc::channel();

    let routes_path = routes_path.to_path_buf();
    let routes_sender = sender.clone();
    pool.execute(move || {
        let _ = routes_sender.send(Loaded::Routes(load_routes(&routes_path)));
    });

    let world_path = world_path.to_path_buf();
    pool.execute(move || {
        let _ = sender.send(Loaded::World(load_world(&world_path)));
    });

    let mut routes = None;
    let mut world = None;
    for _ in 0..2 {
        match receiver.recv() {
            Ok(Loaded::Routes(result)) => routes = Some(result),
            Ok(Loaded::World(result)) => world = Some(result),
            Err(_) => break, // both senders are gone; a worker panicked
        }
    }
    pool.join();

    let routes = match routes {
        Some(Ok(routes)) => routes,
        Some(Err(error)) => return abort(logger, "routes", error),
        None => {
            return abort(logger, "routes", LoaderError::WorkerLost("routes".to_string()));
        }
    };

    let world = match world {
        Some(Ok(world)) => world,
        Some(Err(error)) => return abort(logger, "world", error),
        None => return abort(logger, "world", LoaderError::WorkerLost("world".to_string())),
    };

    let _ = logger.info(
        &format!(
            "Loaded {} routes and {} country outlines",
            routes.len(),
            world.features.len()
        ),
        Color::Green,
        false,
    );

    Ok(Datasets { routes, world })
}

fn abort<T>(logger: &Logger, dataset: &str, error: LoaderError) -> Result<T, LoaderError> {
    let _ = logger.error(
        &format!("Failed to load the {} dataset: {}", dataset, error),
        true,
    );
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const HEADER: &str = "ID,AirlineID,AirlineName,SourceAirportID,SourceAirport,SourceLatitude,SourceLongitude,SourceCity,SourceCountry,DestAirportID,DestAirport,DestLatitude,DestLongitude,DestCity,DestCountry";

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "USA",
                "properties": { "name": "United States" },
                "geometry": { "type": "Polygon", "coordinates": [] }
            }
        ]
    }"#;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("dashboard_datasets_fixtures").join(name);
        fs::create_dir_all(&dir).expect("Failed to create fixture directory");
        dir
    }

    fn write_routes(dir: &Path) -> PathBuf {
        let path = dir.join("routes.csv");
        fs::write(
            &path,
            format!(
                "{}\n1,AA,American,JFK,John F Kennedy Intl,40.64,-73.78,New York,United States,LAX,Los Angeles Intl,33.94,-118.40,Los Angeles,United States\n",
                HEADER
            ),
        )
        .expect("Failed to write routes fixture");
        path
    }

    fn write_world(dir: &Path) -> PathBuf {
        let path = dir.join("countries.geo.json");
        fs::write(&path, WORLD).expect("Failed to write world fixture");
        path
    }

    #[test]
    fn test_both_loads_complete_before_returning() {
        let dir = fixture_dir("ok");
        let routes_path = write_routes(&dir);
        let world_path = write_world(&dir);
        let logger = Logger::new(&dir, "loader").expect("Failed to create logger");

        let datasets =
            load_datasets(&routes_path, &world_path, &logger).expect("Failed to load datasets");
        assert_eq!(datasets.routes.len(), 1);
        assert_eq!(datasets.world.features.len(), 1);
    }

    #[test]
    fn test_a_missing_routes_file_aborts_and_is_logged() {
        let dir = fixture_dir("missing_routes");
        let world_path = write_world(&dir);
        let logger = Logger::new(&dir, "loader").expect("Failed to create logger");

        let result = load_datasets(&dir.join("absent.csv"), &world_path, &logger);
        assert!(result.is_err());

        let log_contents =
            fs::read_to_string(dir.join("loader.log")).expect("Failed to read log file");
        assert!(log_contents.contains("[ERROR]"));
        assert!(log_contents.contains("routes"));
    }

    #[test]
    fn test_a_malformed_world_file_aborts() {
        let dir = fixture_dir("bad_world");
        let routes_path = write_routes(&dir);
        let world_path = dir.join("countries.geo.json");
        fs::write(&world_path, "not json at all").expect("Failed to write world fixture");
        let logger = Logger::new(&dir, "loader").expect("Failed to create logger");

        let result = load_datasets(&routes_path, &world_path, &logger);
        assert!(matches!(result, Err(LoaderError::Json(_))));
    }
}
