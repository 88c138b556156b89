use std::{fs::File, path::Path};

use tracing::debug;

use crate::{
    domain::symbol_map::{DuplicatePolicy, SymbolMap},
    error::{Error, Result},
    json,
};

pub const DEFAULT_SOURCE: &str = "coins_list.json";
pub const DEFAULT_DESTINATION: &str = "symbol_id_map.json";

/// Printed once a conversion succeeded.
pub const CONFIRMATION: &str = "Data has been converted and written to output.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub records: usize,
    pub symbols: usize,
}

impl Conversion {
    /// Records whose symbol was already taken by an earlier record.
    pub fn overwritten(&self) -> usize {
        self.records - self.symbols
    }
}

/// Turn the coin list at `source` into a symbol map written to `destination`.
///
/// The whole list is read and checked before `destination` is opened, so a
/// bad coin list never truncates an existing map. A write interrupted half
/// way still leaves a partial file behind.
pub fn convert(source: &Path, destination: &Path, policy: DuplicatePolicy) -> Result<Conversion> {
    let file = File::open(source).map_err(|err| Error::ReadSource {
        path: source.to_owned(),
        source: err,
    })?;

    let document = json::read(file).map_err(|err| {
        if err.is_io() {
            Error::ReadSource {
                path: source.to_owned(),
                source: err.into(),
            }
        } else {
            Error::ParseSource {
                path: source.to_owned(),
                source: err,
            }
        }
    })?;

    let coins = json::coins(document)?;
    let records = coins.len();
    debug!(records, source = %source.display(), "coin list parsed");

    let map = SymbolMap::from_coins(coins, policy)?;

    let file = File::create(destination).map_err(|err| Error::CreateDestination {
        path: destination.to_owned(),
        source: err,
    })?;
    json::write(&map, file).map_err(|err| Error::WriteDestination {
        path: destination.to_owned(),
        source: err,
    })?;
    debug!(symbols = map.len(), destination = %destination.display(), "symbol map written");

    Ok(Conversion {
        records,
        symbols: map.len(),
    })
}

pub fn load_map(path: &Path) -> Result<SymbolMap> {
    let file = File::open(path).map_err(|err| Error::ReadSource {
        path: path.to_owned(),
        source: err,
    })?;

    json::load(file).map_err(|err| Error::LoadMap {
        path: path.to_owned(),
        source: err,
    })
}
