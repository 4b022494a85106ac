use crate::domain::market_data::{PriceRecord, PriceTable, Selection};
use crate::domain::table::{PaginationState, TableRow};

/// Domain service slicing the selected rows into pages
#[derive(Debug, Clone, Copy, Default)]
pub struct TablePaginator;

impl TablePaginator {
    pub fn new() -> Self {
        Self
    }

    /// Selected rows in table order (not selection order).
    fn matching<'a>(
        &self,
        table: &'a PriceTable,
        selection: &'a Selection,
    ) -> impl Iterator<Item = &'a PriceRecord> + 'a {
        table.records().iter().filter(move |record| selection.contains(&record.ticker))
    }

    pub fn matching_count(&self, table: &PriceTable, selection: &Selection) -> usize {
        if selection.is_empty() {
            return 0;
        }
        self.matching(table, selection).count()
    }

    /// Rows `[page * size, (page + 1) * size)` of the selection; short or
    /// empty when the page runs past the end.
    pub fn page(&self, table: &PriceTable, selection: &Selection, pagination: PaginationState) -> Vec<TableRow> {
        if selection.is_empty() {
            return Vec::new();
        }
        let (start, end) = pagination.row_range();
        self.matching(table, selection)
            .skip(start)
            .take(end - start)
            .map(TableRow::from)
            .collect()
    }

    /// Number of pages needed for the selection; zero when nothing matches.
    pub fn page_count(&self, table: &PriceTable, selection: &Selection, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.matching_count(table, selection).div_ceil(page_size)
    }
}
