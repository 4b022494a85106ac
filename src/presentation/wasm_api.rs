use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{DashboardService, LoadPriceTableUseCase};
use crate::config::DashboardConfig;
use crate::domain::{
    chart::{FigureRenderer, ViewMode},
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    market_data::Selection,
    table::PaginationState,
};
use crate::infrastructure::{PlotlyRenderer, PriceTableHttpClient};

/// WASM API for embedding the dashboard queries without the Leptos UI.
/// Thin bridge to the application layer.
#[wasm_bindgen]
pub struct StockDashboardApi {
    config: DashboardConfig,
    service: Rc<RefCell<Option<DashboardService>>>,
}

#[wasm_bindgen]
impl StockDashboardApi {
    /// `config` may be `undefined` or a partial `DashboardConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<StockDashboardApi, JsValue> {
        let config = DashboardConfig::from_js(&config)?;
        Ok(Self { config, service: Rc::new(RefCell::new(None)) })
    }

    /// Fetch the price table; resolves to the number of records loaded.
    pub fn load(&self) -> Promise {
        let slot = Rc::clone(&self.service);
        let url = self.config.data_url.clone();

        future_to_promise(async move {
            let service = LoadPriceTableUseCase::new(PriceTableHttpClient::new(url)).execute().await?;
            let records = service.record_count();
            *slot.borrow_mut() = Some(service);
            Ok(JsValue::from(records as f64))
        })
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.service.borrow().is_some()
    }

    /// Dropdown options in table order
    pub fn tickers(&self) -> Result<JsValue, JsValue> {
        let tickers = self.with_service(|service| Ok(service.ticker_options()))?;
        to_js(&tickers)
    }

    /// `{data, layout}` for the given tickers, optionally starting in `"line"` or `"candle"` mode.
    pub fn figure(&self, tickers: JsValue, view_mode: Option<String>) -> Result<JsValue, JsValue> {
        let selection = parse_selection(&tickers)?;
        let mode = parse_view_mode(view_mode.as_deref())?;
        let figure = self.with_service(|service| Ok(service.figure_in_mode(&selection, mode)))?;
        to_js(&figure)
    }

    /// Draw the figure for `tickers` into the configured chart element.
    #[wasm_bindgen(js_name = renderFigure)]
    pub fn render_figure(&self, tickers: JsValue) -> Result<(), JsValue> {
        let selection = parse_selection(&tickers)?;
        let figure = self.with_service(|service| Ok(service.figure(&selection)))?;
        PlotlyRenderer::new(self.config.chart_element_id.clone()).render(&figure)?;
        Ok(())
    }

    /// Rows `{"Adj Close", "Ticker"}` of one page; page size defaults to the configured one.
    #[wasm_bindgen(js_name = tablePage)]
    pub fn table_page(
        &self,
        tickers: JsValue,
        page_current: usize,
        page_size: Option<usize>,
    ) -> Result<JsValue, JsValue> {
        let selection = parse_selection(&tickers)?;
        let pagination = PaginationState::new(page_current, page_size.unwrap_or(self.config.page_size))?;
        let rows = self.with_service(|service| Ok(service.table_page(&selection, pagination)))?;
        to_js(&rows)
    }

    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self, tickers: JsValue, page_size: Option<usize>) -> Result<usize, JsValue> {
        let selection = parse_selection(&tickers)?;
        let page_size = PaginationState::first_page(page_size.unwrap_or(self.config.page_size))?.page_size();
        Ok(self.with_service(|service| Ok(service.page_count(&selection, page_size)))?)
    }
}

impl StockDashboardApi {
    /// Wrap an already loaded service, skipping `load()`.
    pub fn from_service(config: DashboardConfig, service: DashboardService) -> Self {
        Self { config, service: Rc::new(RefCell::new(Some(service))) }
    }

    fn with_service<T>(&self, f: impl FnOnce(&DashboardService) -> AppResult<T>) -> AppResult<T> {
        match self.service.borrow().as_ref() {
            Some(service) => f(service),
            None => {
                get_logger().warn(
                    LogComponent::Presentation("StockDashboardApi"),
                    "⚠️ Query before load() completed",
                );
                Err(AppError::ValidationError("Price table not loaded; call load() first".to_string()))
            }
        }
    }
}

fn parse_selection(tickers: &JsValue) -> AppResult<Selection> {
    if tickers.is_undefined() || tickers.is_null() {
        return Ok(Selection::new());
    }
    let symbols: Vec<String> = tickers
        .into_serde()
        .map_err(|e| AppError::ValidationError(format!("Tickers must be an array of strings: {e}")))?;
    Selection::from_symbols(symbols)
}

fn parse_view_mode(mode: Option<&str>) -> AppResult<ViewMode> {
    match mode {
        None => Ok(ViewMode::default()),
        Some(name) => ViewMode::from_str(name)
            .map_err(|_| AppError::ValidationError(format!("Unknown view mode: {name}"))),
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value)
        .map_err(|e| AppError::ParseError(format!("Failed to serialize result: {e}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_defaults_to_line() {
        assert_eq!(parse_view_mode(None).unwrap(), ViewMode::Line);
        assert_eq!(parse_view_mode(Some("line")).unwrap(), ViewMode::Line);
        assert_eq!(parse_view_mode(Some("candle")).unwrap(), ViewMode::Candlestick);
    }

    #[test]
    fn unknown_view_mode_is_rejected() {
        assert!(matches!(parse_view_mode(Some("area")), Err(AppError::ValidationError(_))));
    }
}
