use std::sync::Arc;

use crate::domain::{
    chart::{ChartAssembler, Figure, ViewMode},
    market_data::{PriceTable, Selection, Ticker},
    table::{PaginationState, TablePaginator, TableRow},
};

/// Application service answering every dashboard query from the loaded table.
///
/// Holds no mutable state: the same inputs always give the same figure and
/// the same page.
#[derive(Debug, Clone)]
pub struct DashboardService {
    table: Arc<PriceTable>,
    assembler: ChartAssembler,
    paginator: TablePaginator,
}

impl DashboardService {
    pub fn new(table: impl Into<Arc<PriceTable>>) -> Self {
        Self { table: table.into(), assembler: ChartAssembler::new(), paginator: TablePaginator::new() }
    }

    pub fn record_count(&self) -> usize {
        self.table.len()
    }

    /// Dropdown options, in order of first appearance in the table
    pub fn ticker_options(&self) -> Vec<Ticker> {
        self.table.tickers()
    }

    /// Initial selection: the alphabetically first ticker, if any.
    pub fn default_selection(&self) -> Selection {
        self.table.default_ticker().into_iter().collect()
    }

    pub fn figure(&self, selection: &Selection) -> Figure {
        self.assembler.assemble(&self.table, selection)
    }

    pub fn figure_in_mode(&self, selection: &Selection, mode: ViewMode) -> Figure {
        self.assembler.assemble_in_mode(&self.table, selection, mode)
    }

    pub fn table_page(&self, selection: &Selection, pagination: PaginationState) -> Vec<TableRow> {
        self.paginator.page(&self.table, selection, pagination)
    }

    pub fn page_count(&self, selection: &Selection, page_size: usize) -> usize {
        self.paginator.page_count(&self.table, selection, page_size)
    }
}

impl PartialEq for DashboardService {
    /// Same service when both point at the same loaded table.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }
}
