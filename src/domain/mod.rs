pub mod coin;
pub mod error;
pub mod symbol_map;
