use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::domain::{
    errors::{AppError, AppResult, NetworkResult},
    logging::{LogComponent, get_logger},
    market_data::{PriceRecord, PriceTable, PriceTableSource},
};

mod dto;

use dto::PriceRecordDto;

/// HTTP client fetching the pre-computed price table served next to the app
#[derive(Debug, Clone)]
pub struct PriceTableHttpClient {
    url: String,
}

impl PriceTableHttpClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_table(&self) -> NetworkResult<PriceTable> {
        get_logger().info(
            LogComponent::Infrastructure("PriceTableHttp"),
            &format!("📡 Fetching price table from: {}", self.url),
        );

        let response = Request::get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read response: {e:?}")))?;

        get_logger().debug(
            LogComponent::Infrastructure("PriceTableHttp"),
            &format!("✅ GET response: {} bytes", body.len()),
        );

        parse_price_table(&body)
    }
}

impl PriceTableSource for PriceTableHttpClient {
    fn load_table(&self) -> LocalBoxFuture<'_, AppResult<PriceTable>> {
        self.fetch_table().boxed_local()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Parse a records-oriented JSON export (`[{"Date": .., "Ticker": .., ..}, ..]`).
pub fn parse_price_table(json: &str) -> AppResult<PriceTable> {
    let rows: Vec<PriceRecordDto> = serde_json::from_str(json)
        .map_err(|e| AppError::ParseError(format!("Failed to parse price table JSON: {e}")))?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            PriceRecord::try_from(row).map_err(|e| AppError::ParseError(format!("Row {index}: {e}")))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let invalid = records.iter().filter(|r| !r.ohlc.is_valid()).count();
    if invalid > 0 {
        get_logger().warn(
            LogComponent::Infrastructure("PriceTableHttp"),
            &format!("⚠️ {invalid} rows have inconsistent OHLC values"),
        );
    }

    Ok(PriceTable::new(records))
}
