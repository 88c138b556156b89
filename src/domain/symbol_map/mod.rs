use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    coin::{Coin, CoinId},
    error::{Error, Result},
};

/// What to do when two records share the same symbol.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one, keeping the key's position.
    #[default]
    LastWriteWins,
    /// Fail on the first repeated symbol.
    Reject,
}

/// Mapping from coin symbol to coin id.
///
/// Keys keep the order in which they were first seen, so serializing the same
/// coin list always yields the same bytes.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SymbolMap(IndexMap<String, CoinId>);

impl SymbolMap {
    pub fn from_coins(
        coins: impl IntoIterator<Item = Coin>,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        let mut map = IndexMap::new();

        for Coin { symbol, id } in coins {
            match map.entry(symbol) {
                Entry::Vacant(entry) => {
                    entry.insert(id);
                }
                Entry::Occupied(mut entry) => match policy {
                    DuplicatePolicy::LastWriteWins => {
                        let previous = entry.insert(id);
                        warn!(
                            symbol = %entry.key(),
                            %previous,
                            current = %entry.get(),
                            "duplicate symbol, keeping the later id"
                        );
                    }
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateSymbol {
                            first: entry.get().clone(),
                            symbol: entry.key().clone(),
                            second: id,
                        });
                    }
                },
            }
        }

        Ok(Self(map))
    }

    pub fn get(&self, symbol: &str) -> Option<&CoinId> {
        self.0.get(symbol)
    }

    /// Look a ticker up regardless of its case.
    ///
    /// Symbols in coin lists are lowercase while transaction feeds usually
    /// spell them upper-case.
    pub fn resolve(&self, symbol: &str) -> Result<&CoinId> {
        self.0
            .get(&symbol.to_lowercase())
            .ok_or_else(|| Error::UnknownSymbol {
                symbol: symbol.to_owned(),
            })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoinId)> {
        self.0.iter().map(|(symbol, id)| (symbol.as_str(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(symbol: &str, id: &str) -> Coin {
        Coin {
            symbol: symbol.to_owned(),
            id: id.into(),
        }
    }

    #[test]
    fn maps_every_distinct_symbol() {
        let coins = vec![coin("btc", "bitcoin"), coin("eth", "ethereum"), coin("ada", "cardano")];

        let map = SymbolMap::from_coins(coins.clone(), DuplicatePolicy::default()).unwrap();

        assert_eq!(map.len(), coins.len());
        for c in &coins {
            assert_eq!(map.get(&c.symbol), Some(&c.id));
        }
    }

    #[test]
    fn later_record_wins_in_place() {
        let coins = vec![
            coin("btc", "bitcoin"),
            coin("eth", "ethereum"),
            coin("btc", "bitcoin-wrapped"),
        ];

        let map = SymbolMap::from_coins(coins, DuplicatePolicy::LastWriteWins).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("btc"), Some(&CoinId::from("bitcoin-wrapped")));
        let order: Vec<_> = map.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(order, ["btc", "eth"]);
    }

    #[test]
    fn reject_policy_reports_both_ids() {
        let coins = vec![coin("btc", "bitcoin"), coin("btc", "bitcoin-wrapped")];

        let err = SymbolMap::from_coins(coins, DuplicatePolicy::Reject).unwrap_err();

        match err {
            Error::DuplicateSymbol {
                symbol,
                first,
                second,
            } => {
                assert_eq!(symbol, "btc");
                assert_eq!(first, CoinId::from("bitcoin"));
                assert_eq!(second, CoinId::from("bitcoin-wrapped"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let map = SymbolMap::from_coins(Vec::new(), DuplicatePolicy::Reject).unwrap();

        assert!(map.is_empty());
    }

    #[test]
    fn resolve_ignores_case() {
        let map = SymbolMap::from_coins(vec![coin("btc", "bitcoin")], DuplicatePolicy::default())
            .unwrap();

        assert_eq!(map.resolve("BTC").unwrap(), &CoinId::from("bitcoin"));
        assert_eq!(map.get("BTC"), None);
        assert!(matches!(
            map.resolve("doge"),
            Err(Error::UnknownSymbol { symbol }) if symbol == "doge"
        ));
    }
}
