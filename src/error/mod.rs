use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open {}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("coin list {} is not valid JSON", path.display())]
    ParseSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not create symbol map {}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write symbol map {}", path.display())]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not load symbol map {}", path.display())]
    LoadMap {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Domain(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
