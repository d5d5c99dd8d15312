use std::fmt;

use serde::{Deserialize, Serialize};

/// The coins the chart can display.
/// The lowercase variant name doubles as the CoinGecko coin id.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Coin {
    #[default]
    Bitcoin,
    Ethereum,
    Ripple,
    Litecoin,
    Dogecoin,
}

impl Coin {
    /// The id used in the CoinGecko path, e.g. `bitcoin`.
    pub fn api_id(self) -> &'static str {
        self.into()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Coin::Bitcoin => "Bitcoin",
            Coin::Ethereum => "Ethereum",
            Coin::Ripple => "Ripple",
            Coin::Litecoin => "Litecoin",
            Coin::Dogecoin => "Dogecoin",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn api_ids_are_lowercase_names() {
        let ids: Vec<&str> = Coin::iter().map(Coin::api_id).collect();
        assert_eq!(
            ids,
            vec!["bitcoin", "ethereum", "ripple", "litecoin", "dogecoin"]
        );
    }

    #[test]
    fn parses_from_api_id() {
        assert_eq!(Coin::from_str("dogecoin").ok(), Some(Coin::Dogecoin));
        assert!(Coin::from_str("solana").is_err());
    }

    #[test]
    fn default_is_bitcoin() {
        assert_eq!(Coin::default(), Coin::Bitcoin);
        assert_eq!(Coin::Bitcoin.to_string(), "Bitcoin");
    }
}
