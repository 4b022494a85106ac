use serde::{Deserialize, Serialize};

use crate::domain::market_data::{PriceRecord, Ticker};

/// Domain entity - one displayed table row, keyed the way the table columns are labelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "Adj Close")]
    pub adj_close: f64,
    #[serde(rename = "Ticker")]
    pub ticker: Ticker,
}

impl From<&PriceRecord> for TableRow {
    fn from(record: &PriceRecord) -> Self {
        Self { adj_close: record.adj_close.value(), ticker: record.ticker.clone() }
    }
}

/// Column headers in display order
pub const TABLE_COLUMNS: [&str; 2] = ["Adj Close", "Ticker"];
