use crate::application::DashboardService;
use crate::domain::{market_data::Selection, table::DEFAULT_PAGE_SIZE};
use crate::global_signals;

/// Where the one-shot table load stands
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready { records: usize, tickers: usize },
    Failed(String),
}

impl LoadStatus {
    pub fn message(&self) -> String {
        match self {
            LoadStatus::Loading => "⏳ Loading price table...".to_string(),
            LoadStatus::Ready { records, tickers } => {
                format!("✅ {records} records • {tickers} tickers")
            }
            LoadStatus::Failed(reason) => format!("❌ {reason}"),
        }
    }
}

// Reactive store of the dashboard: loaded data, selection and pagination.
global_signals! {
    pub dashboard: Option<DashboardService> = None,
    pub selected_tickers: Selection = Selection::new(),
    pub page_current: usize = 0,
    pub page_size: usize = DEFAULT_PAGE_SIZE,
    pub load_status: LoadStatus = LoadStatus::Loading,
    pub chart_error: Option<String> = None,
}

thread_local! {
    static GLOBALS: Globals = Globals::new();
}

pub fn globals() -> Globals {
    GLOBALS.with(|globals| *globals)
}
