use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical identifier of a coin.
///
/// Coin lists carry string slugs (`"bitcoin"`), but any JSON scalar is
/// accepted and written back unchanged.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum CoinId {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinId::Text(id) => f.write_str(id),
            CoinId::Number(id) => write!(f, "{id}"),
            CoinId::Bool(id) => write!(f, "{id}"),
            CoinId::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for CoinId {
    fn from(id: &str) -> Self {
        CoinId::Text(id.to_owned())
    }
}

/// One entry of a coin list. Any other attribute of the record is ignored.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Coin {
    #[serde(deserialize_with = "scalar_key")]
    pub symbol: String,
    pub id: CoinId,
}

/// Object keys must be strings, so scalar symbols are spelled out as JSON
/// would print them: `7` becomes `"7"`, `true` becomes `"true"`.
fn scalar_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(symbol) => Ok(symbol),
        Value::Number(symbol) => Ok(symbol.to_string()),
        Value::Bool(symbol) => Ok(symbol.to_string()),
        Value::Null => Ok("null".to_owned()),
        Value::Array(_) | Value::Object(_) => {
            Err(de::Error::custom("symbol must be a string, number, boolean or null"))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ignores_extra_attributes() {
        let coin: Coin =
            serde_json::from_value(json!({"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"}))
                .unwrap();

        assert_eq!(coin.symbol, "btc");
        assert_eq!(coin.id, CoinId::from("bitcoin"));
    }

    #[test]
    fn accepts_numeric_id() {
        let coin: Coin = serde_json::from_value(json!({"symbol": "btc", "id": 1})).unwrap();

        assert_eq!(coin.id, CoinId::Number(1.into()));
        assert_eq!(coin.id.to_string(), "1");
    }

    #[test]
    fn accepts_boolean_and_null_ids() {
        let flag: Coin = serde_json::from_value(json!({"symbol": "btc", "id": true})).unwrap();
        let none: Coin = serde_json::from_value(json!({"symbol": "eth", "id": null})).unwrap();

        assert_eq!(flag.id, CoinId::Bool(true));
        assert_eq!(none.id, CoinId::Null);
        assert_eq!(serde_json::to_value(&flag.id).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(&none.id).unwrap(), json!(null));
    }

    #[test]
    fn scalar_symbols_become_keys() {
        let symbol = |symbol: Value| {
            serde_json::from_value::<Coin>(json!({"symbol": symbol, "id": "x"}))
                .unwrap()
                .symbol
        };

        assert_eq!(symbol(json!(7)), "7");
        assert_eq!(symbol(json!(1.5)), "1.5");
        assert_eq!(symbol(json!(true)), "true");
        assert_eq!(symbol(json!(null)), "null");
    }

    #[test]
    fn rejects_missing_fields_and_containers() {
        assert!(serde_json::from_value::<Coin>(json!({"symbol": "btc"})).is_err());
        assert!(serde_json::from_value::<Coin>(json!({"id": "bitcoin"})).is_err());
        assert!(serde_json::from_value::<Coin>(json!({"symbol": ["btc"], "id": "x"})).is_err());
        assert!(serde_json::from_value::<Coin>(json!({"symbol": "x", "id": {"a": 1}})).is_err());
        assert!(serde_json::from_value::<Coin>(json!({"symbol": "x", "id": [1]})).is_err());
    }
}
