use serde::{Deserialize, Serialize};

use super::value_objects::Ticker;
use crate::domain::errors::AppResult;

/// Ordered set of tickers picked by the user.
///
/// Order is the order in which tickers were added; the chart relies on it
/// to line up the Line/Candle visibility masks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Ticker>", into = "Vec<Ticker>")]
pub struct Selection {
    tickers: Vec<Ticker>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw symbols, dropping repeats after their first occurrence.
    pub fn from_symbols<I, S>(symbols: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for symbol in symbols {
            selection.add(Ticker::new(symbol)?);
        }
        Ok(selection)
    }

    /// Returns false if the ticker was already selected.
    pub fn add(&mut self, ticker: Ticker) -> bool {
        if self.contains(&ticker) {
            return false;
        }
        self.tickers.push(ticker);
        true
    }

    /// Returns false if the ticker was not selected.
    pub fn remove(&mut self, ticker: &Ticker) -> bool {
        let before = self.tickers.len();
        self.tickers.retain(|t| t != ticker);
        self.tickers.len() != before
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.tickers.contains(ticker)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticker> {
        self.tickers.iter()
    }

    pub fn as_slice(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl From<Vec<Ticker>> for Selection {
    fn from(tickers: Vec<Ticker>) -> Self {
        tickers.into_iter().collect()
    }
}

impl From<Selection> for Vec<Ticker> {
    fn from(selection: Selection) -> Self {
        selection.tickers
    }
}

impl FromIterator<Ticker> for Selection {
    fn from_iter<T: IntoIterator<Item = Ticker>>(iter: T) -> Self {
        let mut selection = Self::new();
        for ticker in iter {
            selection.add(ticker);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Ticker;
    type IntoIter = std::slice::Iter<'a, Ticker>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickers.iter()
    }
}
