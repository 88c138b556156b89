use thiserror::Error;

use crate::domain::coin::CoinId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("coin list must be a JSON array")]
    NotAnArray,
    #[error("record {index} is not a coin with a scalar symbol and id")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("symbol {symbol} is mapped to both {first} and {second}")]
    DuplicateSymbol {
        symbol: String,
        first: CoinId,
        second: CoinId,
    },
    #[error("symbol {symbol} is not mapped to any coin id")]
    UnknownSymbol { symbol: String },
}

pub type Result<T> = std::result::Result<T, Error>;
