use serde::Deserialize;

use crate::domain::{
    errors::{AppError, AppResult},
    market_data::{Ohlc, Price, PriceRecord, Ticker, TradeDate},
};

/// Date column as exported: ISO text or epoch milliseconds
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum DateDto {
    Millis(i64),
    Text(String),
}

impl DateDto {
    fn into_trade_date(self) -> AppResult<TradeDate> {
        match self {
            DateDto::Millis(millis) => TradeDate::from_epoch_millis(millis),
            DateDto::Text(text) => TradeDate::parse(&text),
        }
    }
}

/// One row of a records-oriented JSON export of the price table.
///
/// Missing prices (`null`, pandas' NaN) become `NaN` so the chart shows a gap.
#[derive(Debug, Deserialize)]
pub(super) struct PriceRecordDto {
    #[serde(rename = "Date", alias = "date", alias = "index")]
    date: DateDto,
    #[serde(rename = "Ticker", alias = "ticker")]
    ticker: String,
    #[serde(rename = "Open", alias = "open")]
    open: Option<f64>,
    #[serde(rename = "High", alias = "high")]
    high: Option<f64>,
    #[serde(rename = "Low", alias = "low")]
    low: Option<f64>,
    #[serde(rename = "Close", alias = "close")]
    close: Option<f64>,
    #[serde(rename = "Adj Close", alias = "adj_close", alias = "Adj_Close")]
    adj_close: Option<f64>,
}

fn price(value: Option<f64>) -> Price {
    Price::new(value.unwrap_or(f64::NAN))
}

impl TryFrom<PriceRecordDto> for PriceRecord {
    type Error = AppError;

    fn try_from(dto: PriceRecordDto) -> Result<Self, Self::Error> {
        let ohlc = Ohlc::new(price(dto.open), price(dto.high), price(dto.low), price(dto.close));
        Ok(PriceRecord::new(
            dto.date.into_trade_date()?,
            Ticker::new(dto.ticker)?,
            ohlc,
            price(dto.adj_close),
        ))
    }
}
