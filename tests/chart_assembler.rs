use stock_dashboard_wasm::domain::{
    chart::{ChartAssembler, Series, ViewMode},
    market_data::{Ohlc, Price, PriceRecord, PriceTable, Selection, Ticker, TradeDate},
};

fn record(day: u32, ticker: &str, close: f64) -> PriceRecord {
    PriceRecord::new(
        TradeDate::parse(&format!("2021-03-{day:02}")).unwrap(),
        Ticker::new(ticker).unwrap(),
        Ohlc::new(
            Price::new(close - 1.0),
            Price::new(close + 2.0),
            Price::new(close - 2.0),
            Price::new(close),
        ),
        Price::new(close * 0.98),
    )
}

fn sample_table() -> PriceTable {
    PriceTable::new(vec![
        record(1, "MSFT", 230.0),
        record(1, "AAPL", 120.0),
        record(2, "MSFT", 231.0),
        record(2, "AAPL", 121.0),
        record(3, "AAPL", 122.0),
        record(3, "TSLA", 650.0),
    ])
}

#[test]
fn lines_then_candles_in_selection_order() {
    let table = sample_table();
    let selection = Selection::from_symbols(["TSLA", "AAPL", "MSFT"]).unwrap();
    let figure = ChartAssembler::new().assemble(&table, &selection);

    assert_eq!(figure.data.len(), 6);
    let names: Vec<_> = figure.data.iter().map(Series::name).collect();
    assert_eq!(names, ["TSLA", "AAPL", "MSFT", "TSLA", "AAPL", "MSFT"]);
    assert!(figure.data[..3].iter().all(|s| matches!(s, Series::Line(_))));
    assert!(figure.data[3..].iter().all(|s| matches!(s, Series::Candlestick(_))));
}

#[test]
fn line_series_plot_close_prices_by_date() {
    let table = sample_table();
    let selection = Selection::from_symbols(["AAPL"]).unwrap();
    let figure = ChartAssembler::new().assemble(&table, &selection);

    let line = figure.line_series().next().unwrap();
    assert_eq!(line.y, vec![120.0, 121.0, 122.0]);
    let dates: Vec<_> = line.x.iter().map(ToString::to_string).collect();
    assert_eq!(dates, ["2021-03-01", "2021-03-02", "2021-03-03"]);
    assert_eq!(line.mode, "lines");
    assert_eq!(line.opacity, 0.7);
    assert!(line.visible);
}

#[test]
fn candlesticks_start_hidden_without_legend() {
    let table = sample_table();
    let selection = Selection::from_symbols(["MSFT"]).unwrap();
    let figure = ChartAssembler::new().assemble(&table, &selection);

    let candle = figure.candlestick_series().next().unwrap();
    assert!(!candle.visible);
    assert!(!candle.showlegend);
    assert_eq!(candle.open, vec![229.0, 230.0]);
    assert_eq!(candle.high, vec![232.0, 233.0]);
    assert_eq!(candle.low, vec![228.0, 229.0]);
    assert_eq!(candle.close, vec![230.0, 231.0]);
    assert_eq!(figure.visibility(), vec![true, false]);
}

#[test]
fn empty_selection_keeps_interactive_layout() {
    let figure = ChartAssembler::new().assemble(&sample_table(), &Selection::new());

    assert!(figure.data.is_empty());
    let menu = &figure.layout.updatemenus[0];
    assert_eq!(menu.buttons.len(), 2);
    assert!(menu.buttons.iter().all(|b| b.args[0].visible.is_empty()));
    assert_eq!(figure.layout.xaxis.rangeselector.buttons.len(), 5);
    assert!(figure.layout.xaxis.rangeslider.visible);
}

#[test]
fn unknown_ticker_yields_empty_series() {
    let selection = Selection::from_symbols(["GOOG"]).unwrap();
    let figure = ChartAssembler::new().assemble(&sample_table(), &selection);

    assert_eq!(figure.data.len(), 2);
    assert!(figure.line_series().all(|s| s.x.is_empty() && s.y.is_empty()));
    assert!(figure.candlestick_series().all(|s| s.x.is_empty() && s.close.is_empty()));
}

#[test]
fn toggle_buttons_swap_masks() {
    let selection = Selection::from_symbols(["AAPL", "MSFT"]).unwrap();
    let figure = ChartAssembler::new().assemble(&sample_table(), &selection);
    let buttons = &figure.layout.updatemenus[0].buttons;

    assert_eq!(buttons[0].label, "Line");
    assert_eq!(buttons[0].args[0].visible, vec![true, true, false, false]);
    assert_eq!(buttons[1].label, "Candle");
    assert_eq!(buttons[1].args[0].visible, vec![false, false, true, true]);
    assert!(buttons.iter().all(|b| b.method == "update"));
}

#[test]
fn applying_view_mode_matches_button_masks() {
    let table = sample_table();
    let selection = Selection::from_symbols(["AAPL", "MSFT", "TSLA"]).unwrap();
    let assembler = ChartAssembler::new();
    let mut figure = assembler.assemble(&table, &selection);

    figure.apply_view_mode(ViewMode::Candlestick);
    assert_eq!(figure.visibility(), ViewMode::Candlestick.visibility_mask(3));

    figure.apply_view_mode(ViewMode::Candlestick.toggled());
    assert_eq!(figure.visibility(), vec![true, true, true, false, false, false]);

    let candle_first = assembler.assemble_in_mode(&table, &selection, ViewMode::Candlestick);
    assert_eq!(candle_first.visibility(), vec![false, false, false, true, true, true]);
}

#[test]
fn toggle_highlights_the_mode_in_use() {
    let table = sample_table();
    let selection = Selection::from_symbols(["AAPL"]).unwrap();
    let assembler = ChartAssembler::new();

    let line_first = assembler.assemble(&table, &selection);
    assert_eq!(line_first.layout.updatemenus[0].active, 0);

    let candle_first = assembler.assemble_in_mode(&table, &selection, ViewMode::Candlestick);
    let menu = &candle_first.layout.updatemenus[0];
    assert_eq!(menu.active, 1);
    assert_eq!(menu.buttons[menu.active].label, "Candle");
    assert_eq!(menu.buttons[menu.active].args[0].visible, candle_first.visibility());

    let json = serde_json::to_value(&candle_first).unwrap();
    assert_eq!(json["layout"]["updatemenus"][0]["active"], 1);
}

#[test]
fn figure_serializes_to_plotly_shape() {
    let selection = Selection::from_symbols(["AAPL"]).unwrap();
    let figure = ChartAssembler::new().assemble(&sample_table(), &selection);
    let json = serde_json::to_value(&figure).unwrap();

    assert_eq!(json["data"][0]["type"], "scatter");
    assert_eq!(json["data"][0]["name"], "AAPL");
    assert_eq!(json["data"][0]["x"][0], "2021-03-01");
    assert_eq!(json["data"][0]["textposition"], "bottom center");
    assert_eq!(json["data"][1]["type"], "candlestick");
    assert_eq!(json["data"][1]["showlegend"], false);
    assert_eq!(json["layout"]["autosize"], false);
    assert_eq!(json["layout"]["xaxis"]["type"], "date");
    assert_eq!(json["layout"]["updatemenus"][0]["pad"]["r"], 10);
    assert_eq!(json["layout"]["updatemenus"][0]["yanchor"], "top");
}

#[test]
fn assembling_twice_is_identical() {
    let table = sample_table();
    let selection = Selection::from_symbols(["MSFT", "AAPL"]).unwrap();
    let assembler = ChartAssembler::new();
    assert_eq!(assembler.assemble(&table, &selection), assembler.assemble(&table, &selection));
}
