use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Value Object - how the price series are drawn
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
pub enum ViewMode {
    #[default]
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Candle")]
    #[strum(serialize = "candle", serialize = "candlestick")]
    Candlestick,
}

impl ViewMode {
    /// Visibility of every series for `ticker_count` tickers.
    ///
    /// Series are laid out as all line series then all candlestick series,
    /// so the mask is `[line]*n + [candle]*n`.
    pub fn visibility_mask(&self, ticker_count: usize) -> Vec<bool> {
        let lines_visible = matches!(self, ViewMode::Line);
        let mut mask = vec![lines_visible; ticker_count];
        mask.extend(std::iter::repeat(!lines_visible).take(ticker_count));
        mask
    }

    /// Position of this mode's button in the view toggle
    pub fn menu_index(&self) -> usize {
        ViewMode::iter().position(|mode| mode == *self).unwrap_or(0)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Line => ViewMode::Candlestick,
            ViewMode::Candlestick => ViewMode::Line,
        }
    }
}

/// Unit of a range selector step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStep {
    Month,
    Year,
    All,
}

/// Whether a step counts back from the last date or to the start of the period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    Backward,
    Todate,
}

/// Value Object - date-range quick-select presets, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RangePreset {
    #[display(fmt = "1m")]
    OneMonth,
    #[display(fmt = "6m")]
    SixMonths,
    #[display(fmt = "YTD")]
    YearToDate,
    #[display(fmt = "1y")]
    OneYear,
    #[display(fmt = "all")]
    All,
}

impl RangePreset {
    /// (count, step, step mode); `All` carries no count or mode.
    pub fn parameters(&self) -> (Option<u32>, RangeStep, Option<StepMode>) {
        match self {
            RangePreset::OneMonth => (Some(1), RangeStep::Month, Some(StepMode::Backward)),
            RangePreset::SixMonths => (Some(6), RangeStep::Month, Some(StepMode::Backward)),
            RangePreset::YearToDate => (Some(1), RangeStep::Year, Some(StepMode::Todate)),
            RangePreset::OneYear => (Some(1), RangeStep::Year, Some(StepMode::Backward)),
            RangePreset::All => (None, RangeStep::All, None),
        }
    }
}
