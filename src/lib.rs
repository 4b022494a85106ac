use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::DashboardConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// Element the dashboard mounts into; pages that only use the JS API leave it out.
pub const ROOT_ELEMENT_ID: &str = "dashboard-root";

/// Initialize logging and mount the dashboard if the page has a root element
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::default();
    init_services(&config);

    log_info!(LogComponent::Presentation("Initialize"), "🚀 Stock dashboard initialized");

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ELEMENT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => mount_to(root, move || view! { <App config=config /> }),
        None => get_logger().debug(
            LogComponent::Presentation("Initialize"),
            &format!("No #{ROOT_ELEMENT_ID} element, skipping UI mount"),
        ),
    }
}

fn init_services(config: &DashboardConfig) {
    let console_logger = Box::new(infrastructure::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);
}
