//! Build a symbol → id map out of a CoinGecko style coin list.

pub mod convert;
pub mod domain;
pub mod error;
pub mod json;

pub use convert::{convert, load_map, Conversion};
pub use error::{Error, Result};
