//! Shared constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Width of the CSS border around the canvas, in pixels. Pointer coordinates
/// are shifted by this amount so the origin sits inside the border.
pub const DEFAULT_BORDER_INSET_PX: f64 = 5.0;

// ── Disco ───────────────────────────────────────────────────────

/// Interval between disco recolors, in milliseconds.
pub const DEFAULT_DISCO_INTERVAL_MS: u32 = 333;

// ── Colours ─────────────────────────────────────────────────────

/// Fill and background colours (from clrs.cc).
pub const DEFAULT_PALETTE: [&str; 15] = [
    "#001f3f", "#0074D9", "#7FDBFF", "#39CCCC", "#3D9970", "#2ECC40", "#01FF70", "#FFDC00", "#FF851B", "#FF4136",
    "#85144b", "#F012BE", "#B10DC9", "#AAAAAA", "#DDDDDD",
];

/// Default `log` level name used by the host when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
