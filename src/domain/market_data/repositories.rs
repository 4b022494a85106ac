use futures::future::LocalBoxFuture;

use crate::domain::errors::AppResult;
use crate::domain::market_data::PriceTable;

/// Source of the historical price table.
///
/// Futures are local: the browser event loop is single-threaded and the
/// HTTP client is not `Send`.
pub trait PriceTableSource {
    fn load_table(&self) -> LocalBoxFuture<'_, AppResult<PriceTable>>;

    /// Human readable origin used in log lines
    fn describe(&self) -> String;
}
