use std::io::{BufReader, BufWriter, Read, Write};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Result, Serializer, Value};

use crate::domain::{self, coin::Coin, error::Error, symbol_map::SymbolMap};

const INDENT: &[u8] = b"    ";

/// Parse the whole content of a reader as a single JSON document.
///
/// Only syntax is checked here; [`coins`] decides whether the document is a
/// coin list.
pub fn read(reader: impl Read) -> Result<Value> {
    serde_json::from_reader(BufReader::new(reader))
}

/// Decode a parsed document as a list of [`Coin`]s, in document order.
pub fn coins(document: Value) -> domain::error::Result<Vec<Coin>> {
    let Value::Array(records) = document else {
        return Err(Error::NotAnArray);
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<Coin>(record)
                .map_err(|source| Error::MalformedRecord { index, source })
        })
        .collect()
}

/// Write the map as a JSON object indented with four spaces.
///
/// No trailing newline is added, the object is the entire content.
pub fn write(map: &SymbolMap, writer: impl Write) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    let mut serializer =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));

    map.serialize(&mut serializer)?;

    writer.flush().map_err(serde_json::Error::io)
}

/// Read back a map produced by [`write`].
pub fn load(reader: impl Read) -> Result<SymbolMap> {
    serde_json::from_reader(BufReader::new(reader))
}
