//! # trianglepad
//!
//! WebAssembly host for the triangle drawing toy. Drag on the canvas to
//! stretch out a triangle, drag a triangle to move it, double-click one to
//! delete it. The page buttons clear the canvas, shuffle colours, and start
//! or stop disco mode.
//!
//! All drawing logic lives in the `canvas` crate; this crate looks up the page
//! elements, forwards DOM events, and owns the disco timer.

pub mod app;
pub mod dom;
pub mod error;
pub mod style;

use canvas::config::Config;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::error::HostError;

/// Mount the app on the current page.
///
/// `config_json` is an optional JSON object overriding
/// [`canvas::config::Config`] fields; omitted fields keep their defaults.
///
/// # Errors
///
/// Returns a JS error string if the config is invalid or the page has no canvas.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(raw) => Config::from_json(raw).map_err(HostError::from)?,
        None => Config::default(),
    };

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::warn!("logger already installed: {err}");
    }

    let app = App::mount(config)?;
    // Listeners and the disco timer hold weak references; keep the app alive for the page.
    std::mem::forget(app);
    Ok(())
}
