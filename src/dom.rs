//! DOM lookups and page styling.
//!
//! The page is expected to carry a `<canvas>`, a `#header` and the four
//! control buttons. Only the canvas is required; anything else that is
//! missing is logged and skipped.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::error::HostError;
use crate::style;

pub const HEADER_ID: &str = "header";
pub const CLEAR_ID: &str = "clear";
pub const RANDOM_ID: &str = "random";
pub const DISCO_ID: &str = "disco";
pub const STOP_ID: &str = "stop";

/// The page elements the app talks to.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub header: Option<HtmlElement>,
    pub clear: Option<HtmlElement>,
    pub random: Option<HtmlElement>,
    pub disco: Option<HtmlElement>,
    pub stop: Option<HtmlElement>,
}

impl Page {
    /// Find the page elements.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if there is no document or no canvas.
    pub fn locate() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoDocument)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let canvas = document
            .query_selector("canvas")?
            .ok_or(HostError::MissingElement("canvas"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| HostError::WrongElement("canvas", "HtmlCanvasElement"))?;

        Ok(Self {
            header: optional_element(&document, HEADER_ID),
            clear: optional_element(&document, CLEAR_ID),
            random: optional_element(&document, RANDOM_ID),
            disco: optional_element(&document, DISCO_ID),
            stop: optional_element(&document, STOP_ID),
            window,
            document,
            canvas,
        })
    }

    /// Size the canvas to the body and apply the background colour to the page chrome.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a style property cannot be set.
    pub fn apply_theme(&self, background: &str, border_px: f64) -> Result<(), JsValue> {
        if let Some(body) = self.document.body() {
            let (width, height) = style::canvas_size(body.client_width(), body.client_height());
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }

        let canvas_style = self.canvas.style();
        canvas_style.set_property("border", &style::canvas_border(border_px))?;
        canvas_style.set_property("background", background)?;

        if let Some(header) = &self.header {
            header.style().set_property("color", background)?;
        }
        for button in [&self.clear, &self.random, &self.disco, &self.stop].into_iter().flatten() {
            button.style().set_property("background-color", background)?;
        }
        self.show_disco_running(false)
    }

    /// Swap the disco/stop buttons to reflect whether disco mode is on.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a style property cannot be set.
    pub fn show_disco_running(&self, running: bool) -> Result<(), JsValue> {
        let (disco_display, stop_display) = style::disco_button_display(running);
        if let Some(disco) = &self.disco {
            disco.style().set_property("display", disco_display)?;
        }
        if let Some(stop) = &self.stop {
            stop.style().set_property("display", stop_display)?;
        }
        Ok(())
    }
}

fn optional_element(document: &Document, id: &'static str) -> Option<HtmlElement> {
    let element = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if element.is_none() {
        log::warn!("element #{id} not found; its control is disabled");
    }
    element
}
