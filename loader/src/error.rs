use std::fmt;

/// Represents errors that can occur while loading the dashboard's input files.
#[derive(Debug)]
pub enum LoaderError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    WorkerLost(String), // A load task died without reporting a result
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(e) => write!(f, "I/O error: {}", e),
            LoaderError::Csv(e) => write!(f, "Malformed routes file: {}", e),
            LoaderError::Json(e) => write!(f, "Malformed world file: {}", e),
            LoaderError::WorkerLost(dataset) => {
                write!(f, "The {} load task died without reporting", dataset)
            }
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(e) => Some(e),
            LoaderError::Csv(e) => Some(e),
            LoaderError::Json(e) => Some(e),
            LoaderError::WorkerLost(_) => None,
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err)
    }
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::Csv(err)
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        LoaderError::Json(err)
    }
}
