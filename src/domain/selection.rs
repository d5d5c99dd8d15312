use super::{Coin, Timeframe};

/// The user's current (coin, timeframe) choice. Drives what gets fetched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub coin: Coin,
    pub timeframe: Timeframe,
}

impl Selection {
    pub fn new(coin: Coin, timeframe: Timeframe) -> Self {
        Self { coin, timeframe }
    }

    pub fn with_coin(self, coin: Coin) -> Self {
        Self { coin, ..self }
    }

    pub fn with_timeframe(self, timeframe: Timeframe) -> Self {
        Self { timeframe, ..self }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} / {}d", self.coin.api_id(), self.timeframe.days())
    }
}
