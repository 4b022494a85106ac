use crate::application::DashboardService;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::PriceTableSource,
};

/// Use Case: load the price table once and build the dashboard service on top of it
pub struct LoadPriceTableUseCase<S: PriceTableSource> {
    source: S,
}

impl<S: PriceTableSource> LoadPriceTableUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> AppResult<DashboardService> {
        get_logger().info(
            LogComponent::Application("LoadPriceTable"),
            &format!("📥 Loading price table from {}", self.source.describe()),
        );

        let table = match self.source.load_table().await {
            Ok(table) => table,
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("LoadPriceTable"),
                    &format!("❌ Failed to load price table: {e}"),
                );
                return Err(e);
            }
        };

        if table.is_empty() {
            get_logger().warn(
                LogComponent::Application("LoadPriceTable"),
                "⚠️ Price table has no records",
            );
            return Err(AppError::ValidationError("Price table has no records".to_string()));
        }

        let service = DashboardService::new(table);
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("LoadPriceTable"),
            "✅ Price table loaded",
            &format!(
                "records={} tickers={}",
                service.record_count(),
                service.ticker_options().len()
            ),
        );
        Ok(service)
    }
}
