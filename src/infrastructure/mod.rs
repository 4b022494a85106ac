pub mod http;
pub mod rendering;
pub mod services;

pub use http::{PriceTableHttpClient, parse_price_table};
pub use rendering::PlotlyRenderer;
pub use services::{BrowserTimeProvider, ConsoleLogger};
