use chrono::{DateTime, NaiveDate};
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::errors::{AppError, AppResult};

/// Value Object - price in the table's quote currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - ticker symbol as it appears in the table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: impl Into<String>) -> AppResult<Self> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError("Ticker cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Ticker {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ticker::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Value Object - trading day of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Accepts `YYYY-MM-DD` optionally followed by a time part
    /// (`2020-01-02T00:00:00.000`, `2020-01-02 00:00:00`).
    pub fn parse(text: &str) -> AppResult<Self> {
        let text = text.trim();
        let day = text.get(..10).unwrap_or(text);
        if let Some(separator) = text.chars().nth(10) {
            if separator != 'T' && separator != ' ' {
                return Err(AppError::ParseError(format!("Invalid date: {text}")));
            }
        }
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| AppError::ParseError(format!("Invalid date {text}: {e}")))
    }

    /// UTC calendar day of an epoch-milliseconds timestamp
    pub fn from_epoch_millis(millis: i64) -> AppResult<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(|dt| Self(dt.date_naive()))
            .ok_or_else(|| AppError::ParseError(format!("Timestamp out of range: {millis}")))
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

/// Value Object - open/high/low/close of one trading day
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Ohlc {
    /// High bounds every other price and low is bounded by all of them.
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
    }
}
