use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::domain::{
    chart::{Figure, FigureRenderer},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use crate::log_error;

#[wasm_bindgen]
extern "C" {
    /// `Plotly.react(root, data, layout)` - redraws in place, reusing the existing plot
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = react)]
    fn plotly_react(root: &str, data: &JsValue, layout: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Plotly.js renderer for figures - Infrastructure implementation
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    element_id: String,
}

impl PlotlyRenderer {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into() }
    }

    /// `window.Plotly` is present
    pub fn is_plotly_available() -> bool {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Plotly"))
            .map(|plotly| !plotly.is_undefined() && !plotly.is_null())
            .unwrap_or(false)
    }

    fn element_exists(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&self.element_id))
            .is_some()
    }
}

impl FigureRenderer for PlotlyRenderer {
    fn render(&self, figure: &Figure) -> RenderingResult<()> {
        if !Self::is_plotly_available() {
            return Err(AppError::RenderingError("Plotly.js is not loaded".to_string()));
        }
        if !self.element_exists() {
            return Err(AppError::RenderingError(format!(
                "Chart element '{}' not found",
                self.element_id
            )));
        }

        let data = JsValue::from_serde(&figure.data)
            .map_err(|e| AppError::RenderingError(format!("Failed to serialize series: {e}")))?;
        let layout = JsValue::from_serde(&figure.layout)
            .map_err(|e| AppError::RenderingError(format!("Failed to serialize layout: {e}")))?;

        let promise = plotly_react(&self.element_id, &data, &layout)
            .map_err(|e| AppError::RenderingError(format!("Plotly.react failed: {e:?}")))?;

        get_logger().debug(
            LogComponent::Infrastructure("Plotly"),
            &format!("🎨 Rendering {} series into #{}", figure.data.len(), self.element_id),
        );

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log_error!(LogComponent::Infrastructure("Plotly"), "❌ Plotly render rejected: {e:?}");
            }
        });

        Ok(())
    }
}
