use strum::IntoEnumIterator;

use crate::domain::chart::{
    CandlestickSeries, Figure, Layout, LineSeries, MenuButton, Padding, RangePreset,
    RangeSelector, RangeSelectorButton, RangeSlider, Series, UpdateMenu, ViewMode, XAxis,
};
use crate::domain::errors::RenderingResult;
use crate::domain::market_data::{PriceTable, Selection, Ticker};

const LINE_OPACITY: f64 = 0.7;

/// Domain service turning a ticker selection into a chart specification
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartAssembler;

impl ChartAssembler {
    pub fn new() -> Self {
        Self
    }

    /// One line series per ticker, then one hidden candlestick series per
    /// ticker, both in selection order. Unknown tickers get empty series.
    pub fn assemble(&self, table: &PriceTable, selection: &Selection) -> Figure {
        let lines = selection.iter().map(|ticker| Series::Line(self.line_series(table, ticker)));
        let candles = selection
            .iter()
            .map(|ticker| Series::Candlestick(self.candlestick_series(table, ticker)));

        Figure { data: lines.chain(candles).collect(), layout: self.layout(selection.len()) }
    }

    /// Same as [`assemble`](Self::assemble) but starting in `mode`.
    pub fn assemble_in_mode(&self, table: &PriceTable, selection: &Selection, mode: ViewMode) -> Figure {
        let mut figure = self.assemble(table, selection);
        figure.apply_view_mode(mode);
        figure
    }

    fn line_series(&self, table: &PriceTable, ticker: &Ticker) -> LineSeries {
        let (x, y) = table.records_for(ticker).map(|r| (r.date, r.ohlc.close.value())).unzip();
        LineSeries {
            name: ticker.to_string(),
            x,
            y,
            mode: "lines".to_string(),
            opacity: LINE_OPACITY,
            textposition: "bottom center".to_string(),
            visible: true,
        }
    }

    fn candlestick_series(&self, table: &PriceTable, ticker: &Ticker) -> CandlestickSeries {
        let mut series = CandlestickSeries {
            name: ticker.to_string(),
            x: Vec::new(),
            open: Vec::new(),
            high: Vec::new(),
            low: Vec::new(),
            close: Vec::new(),
            visible: false,
            showlegend: false,
        };
        for record in table.records_for(ticker) {
            series.x.push(record.date);
            series.open.push(record.ohlc.open.value());
            series.high.push(record.ohlc.high.value());
            series.low.push(record.ohlc.low.value());
            series.close.push(record.ohlc.close.value());
        }
        series
    }

    /// Layout for `ticker_count` tickers; valid even when the count is zero.
    pub fn layout(&self, ticker_count: usize) -> Layout {
        let view_toggle = UpdateMenu {
            active: ViewMode::default().menu_index(),
            buttons: ViewMode::iter()
                .map(|mode| MenuButton::for_view_mode(mode, ticker_count))
                .collect(),
            direction: "down".to_string(),
            pad: Padding { r: 10, t: 10 },
            showactive: true,
            x: 0.0,
            xanchor: "left".to_string(),
            y: 1.05,
            yanchor: "top".to_string(),
        };

        Layout {
            updatemenus: vec![view_toggle],
            autosize: false,
            xaxis: XAxis {
                rangeselector: RangeSelector {
                    buttons: RangePreset::iter().map(RangeSelectorButton::from).collect(),
                },
                rangeslider: RangeSlider { visible: true },
                axis_type: "date".to_string(),
            },
        }
    }
}

/// Something that can draw a [`Figure`]
pub trait FigureRenderer {
    fn render(&self, figure: &Figure) -> RenderingResult<()>;
}
