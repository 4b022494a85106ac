use quickcheck_macros::quickcheck;
use stock_dashboard_wasm::domain::{
    market_data::{Ohlc, Price, PriceRecord, PriceTable, Selection, Ticker, TradeDate},
    table::{PaginationState, TablePaginator},
};

const SYMBOLS: [&str; 3] = ["AAA", "BBB", "CCC"];

fn record(day: u32, ticker: &str, adj_close: f64) -> PriceRecord {
    let price = Price::new(adj_close);
    PriceRecord::new(
        TradeDate::parse(&format!("2020-01-{:02}", day % 28 + 1)).unwrap(),
        Ticker::new(ticker).unwrap(),
        Ohlc::new(price, price, price, price),
        price,
    )
}

/// 7 AAA rows interleaved with 3 BBB rows
fn seven_row_table() -> PriceTable {
    let mut records = Vec::new();
    for day in 0..7 {
        records.push(record(day, "AAA", 100.0 + day as f64));
        if day % 2 == 0 {
            records.push(record(day, "BBB", 50.0 + day as f64));
        }
    }
    PriceTable::new(records)
}

/// Table from arbitrary bytes: each byte picks one of three tickers
fn table_from_bytes(bytes: &[u8]) -> PriceTable {
    PriceTable::new(
        bytes
            .iter()
            .enumerate()
            .map(|(i, b)| record(i as u32, SYMBOLS[*b as usize % SYMBOLS.len()], i as f64))
            .collect(),
    )
}

fn selection_from_mask(mask: u8) -> Selection {
    SYMBOLS
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, s)| Ticker::new(*s).unwrap())
        .collect()
}

#[test]
fn seven_rows_split_five_and_two() {
    let table = seven_row_table();
    let selection = Selection::from_symbols(["AAA"]).unwrap();
    let paginator = TablePaginator::new();

    let first = paginator.page(&table, &selection, PaginationState::new(0, 5).unwrap());
    let second = paginator.page(&table, &selection, PaginationState::new(1, 5).unwrap());
    let third = paginator.page(&table, &selection, PaginationState::new(2, 5).unwrap());

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 2);
    assert!(third.is_empty());
    assert_eq!(second[1].adj_close, 106.0);
    assert!(first.iter().chain(&second).all(|row| row.ticker.value() == "AAA"));
    assert_eq!(paginator.page_count(&table, &selection, 5), 2);
}

#[test]
fn rows_follow_table_order_not_selection_order() {
    let table = seven_row_table();
    let selection = Selection::from_symbols(["BBB", "AAA"]).unwrap();
    let rows = TablePaginator::new().page(&table, &selection, PaginationState::new(0, 4).unwrap());

    let tickers: Vec<_> = rows.iter().map(|row| row.ticker.value()).collect();
    assert_eq!(tickers, ["AAA", "BBB", "AAA", "AAA"]);
}

#[test]
fn empty_selection_has_no_rows() {
    let table = seven_row_table();
    let paginator = TablePaginator::new();
    assert!(paginator.page(&table, &Selection::new(), PaginationState::default()).is_empty());
    assert_eq!(paginator.page_count(&table, &Selection::new(), 5), 0);
}

#[test]
fn far_page_is_empty_not_an_error() {
    let table = seven_row_table();
    let selection = Selection::from_symbols(["AAA", "BBB"]).unwrap();
    let state = PaginationState::new(usize::MAX, usize::MAX).unwrap();
    assert!(TablePaginator::new().page(&table, &selection, state).is_empty());
}

#[test]
fn rows_serialize_with_column_names() {
    let table = seven_row_table();
    let selection = Selection::from_symbols(["BBB"]).unwrap();
    let rows = TablePaginator::new().page(&table, &selection, PaginationState::new(0, 1).unwrap());
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json, serde_json::json!([{ "Adj Close": 50.0, "Ticker": "BBB" }]));
}

#[quickcheck]
fn page_never_exceeds_page_size(bytes: Vec<u8>, mask: u8, page: u8, size: u8) -> bool {
    let size = size as usize % 10 + 1;
    let table = table_from_bytes(&bytes);
    let state = PaginationState::new(page as usize, size).unwrap();
    TablePaginator::new().page(&table, &selection_from_mask(mask), state).len() <= size
}

#[quickcheck]
fn pages_partition_selected_rows(bytes: Vec<u8>, mask: u8, size: u8) -> bool {
    let size = size as usize % 10 + 1;
    let table = table_from_bytes(&bytes);
    let selection = selection_from_mask(mask);
    let paginator = TablePaginator::new();

    let pages = paginator.page_count(&table, &selection, size);
    let total: usize = (0..pages)
        .map(|page| paginator.page(&table, &selection, PaginationState::new(page, size).unwrap()).len())
        .sum();
    let past_end = paginator.page(&table, &selection, PaginationState::new(pages, size).unwrap());

    total == paginator.matching_count(&table, &selection) && past_end.is_empty()
}

#[quickcheck]
fn repeated_requests_are_identical(bytes: Vec<u8>, mask: u8, page: u8) -> bool {
    let table = table_from_bytes(&bytes);
    let selection = selection_from_mask(mask);
    let state = PaginationState::new(page as usize % 4, 5).unwrap();
    let paginator = TablePaginator::new();
    paginator.page(&table, &selection, state) == paginator.page(&table, &selection, state)
}
