//! Inline style values the host writes onto page elements.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// CSS `display` values for the (disco, stop) buttons given the disco state.
#[must_use]
pub fn disco_button_display(running: bool) -> (&'static str, &'static str) {
    if running { ("none", "block") } else { ("block", "none") }
}

/// CSS `border` shorthand for the canvas frame.
#[must_use]
pub fn canvas_border(width_px: f64) -> String {
    format!("{width_px}px solid black")
}

/// Canvas backing-store size for a body of the given client size.
///
/// Negative sizes (detached body) clamp to zero.
#[must_use]
pub fn canvas_size(body_width: i32, body_height: i32) -> (u32, u32) {
    (body_width.max(0).unsigned_abs(), body_height.max(0).unsigned_abs())
}
