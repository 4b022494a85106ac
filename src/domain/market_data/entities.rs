pub use super::value_objects::{Ohlc, Price, Ticker, TradeDate};
use serde::{Deserialize, Serialize};

/// Domain entity - one row of the historical price table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: TradeDate,
    pub ticker: Ticker,
    pub ohlc: Ohlc,
    pub adj_close: Price,
}

impl PriceRecord {
    pub fn new(date: TradeDate, ticker: Ticker, ohlc: Ohlc, adj_close: Price) -> Self {
        Self { date, ticker, ohlc, adj_close }
    }
}

/// Domain entity - the whole table, kept in source order.
///
/// Loaded once and never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
}

impl PriceTable {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows of a single ticker, in source order
    pub fn records_for<'a>(&'a self, ticker: &'a Ticker) -> impl Iterator<Item = &'a PriceRecord> + 'a {
        self.records.iter().filter(move |record| &record.ticker == ticker)
    }

    /// Unique tickers in order of first appearance
    pub fn tickers(&self) -> Vec<Ticker> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(&record.ticker))
            .map(|record| record.ticker.clone())
            .collect()
    }

    /// Alphabetically first ticker; the dashboard preselects it.
    pub fn default_ticker(&self) -> Option<Ticker> {
        self.records.iter().map(|record| &record.ticker).min().cloned()
    }
}
