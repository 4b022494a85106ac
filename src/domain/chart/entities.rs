use serde::{Deserialize, Serialize};

use super::value_objects::{RangePreset, RangeStep, StepMode, ViewMode};
use crate::domain::market_data::TradeDate;

/// Chart specification handed to the charting library: `{data, layout}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Series>,
    pub layout: Layout,
}

impl Figure {
    pub fn line_series(&self) -> impl Iterator<Item = &LineSeries> {
        self.data.iter().filter_map(|series| match series {
            Series::Line(line) => Some(line),
            Series::Candlestick(_) => None,
        })
    }

    pub fn candlestick_series(&self) -> impl Iterator<Item = &CandlestickSeries> {
        self.data.iter().filter_map(|series| match series {
            Series::Candlestick(candle) => Some(candle),
            Series::Line(_) => None,
        })
    }

    /// Current visibility of every series, in series order.
    pub fn visibility(&self) -> Vec<bool> {
        self.data.iter().map(Series::is_visible).collect()
    }

    /// Apply a visibility mask the way the chart's "update" buttons do.
    /// Extra mask entries are ignored; series past the mask are untouched.
    pub fn apply_visibility(&mut self, mask: &[bool]) {
        for (series, &visible) in self.data.iter_mut().zip(mask) {
            series.set_visible(visible);
        }
    }

    /// Show the series of `mode` and mark its toggle button active.
    pub fn apply_view_mode(&mut self, mode: ViewMode) {
        let mask = mode.visibility_mask(self.line_series().count());
        self.apply_visibility(&mask);
        for menu in &mut self.layout.updatemenus {
            menu.active = mode.menu_index();
        }
    }
}

/// One drawable trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Series {
    #[serde(rename = "scatter")]
    Line(LineSeries),
    #[serde(rename = "candlestick")]
    Candlestick(CandlestickSeries),
}

impl Series {
    pub fn name(&self) -> &str {
        match self {
            Series::Line(line) => &line.name,
            Series::Candlestick(candle) => &candle.name,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Series::Line(line) => line.visible,
            Series::Candlestick(candle) => candle.visible,
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            Series::Line(line) => line.visible = visible,
            Series::Candlestick(candle) => candle.visible = visible,
        }
    }
}

/// Close price over time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<TradeDate>,
    pub y: Vec<f64>,
    pub mode: String,
    pub opacity: f64,
    pub textposition: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickSeries {
    pub name: String,
    pub x: Vec<TradeDate>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub visible: bool,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub updatemenus: Vec<UpdateMenu>,
    pub autosize: bool,
    pub xaxis: XAxis,
}

/// Dropdown of buttons that restyle the figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenu {
    /// Index of the highlighted button
    pub active: usize,
    pub buttons: Vec<MenuButton>,
    pub direction: String,
    pub pad: Padding,
    pub showactive: bool,
    pub x: f64,
    pub xanchor: String,
    pub y: f64,
    pub yanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuButton {
    pub args: Vec<VisibilityUpdate>,
    pub label: String,
    pub method: String,
}

impl MenuButton {
    pub fn for_view_mode(mode: ViewMode, ticker_count: usize) -> Self {
        Self {
            args: vec![VisibilityUpdate { visible: mode.visibility_mask(ticker_count) }],
            label: mode.to_string(),
            method: "update".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityUpdate {
    pub visible: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub r: u32,
    pub t: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub rangeselector: RangeSelector,
    pub rangeslider: RangeSlider,
    #[serde(rename = "type")]
    pub axis_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSelector {
    pub buttons: Vec<RangeSelectorButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectorButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub step: RangeStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepmode: Option<StepMode>,
}

impl From<RangePreset> for RangeSelectorButton {
    fn from(preset: RangePreset) -> Self {
        let (count, step, stepmode) = preset.parameters();
        // "all" is the library's own label for the full range
        let label = count.map(|_| preset.to_string());
        Self { count, label, step, stepmode }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub visible: bool,
}
