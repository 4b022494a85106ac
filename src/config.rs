use gloo::utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::domain::{
    errors::{AppError, AppResult},
    logging::LogLevel,
    table::DEFAULT_PAGE_SIZE,
};

pub const DEFAULT_DATA_URL: &str = "data/all_tickers.json";
pub const DEFAULT_CHART_ELEMENT_ID: &str = "stock_chart";

/// Dashboard settings. Every field is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_url: String,
    pub page_size: usize,
    pub chart_element_id: String,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            chart_element_id: DEFAULT_CHART_ELEMENT_ID.to_string(),
            log_level: LogLevel::build_default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(self) -> AppResult<Self> {
        if self.data_url.trim().is_empty() {
            return Err(AppError::ValidationError("data_url cannot be empty".to_string()));
        }
        if self.chart_element_id.trim().is_empty() {
            return Err(AppError::ValidationError("chart_element_id cannot be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(AppError::ValidationError("page_size must be greater than zero".to_string()));
        }
        Ok(self)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| AppError::ParseError(format!("Invalid dashboard config: {e}")))?
            .validate()
    }

    /// `undefined`/`null` mean "use the defaults".
    pub fn from_js(value: &JsValue) -> AppResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        value
            .into_serde::<Self>()
            .map_err(|e| AppError::ParseError(format!("Invalid dashboard config: {e}")))?
            .validate()
    }
}
