//! Triangle drawing engine for the browser canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole lifecycle of the drawing: turning raw pointer events into triangle
//! mutations, hit-testing, recolouring and redrawing. The host layer only
//! wires DOM events and timers to the engine and repaints when an
//! [`engine::Action::RenderNeeded`] comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Triangles and the ordered in-memory store |
//! | [`hit`] | Strict point-in-triangle test, topmost first |
//! | [`render`] | Full clear-and-replay rendering to a [`render::Surface`] |
//! | [`input`] | The gesture state machine |
//! | [`palette`] | Background reservation and random fill colours |
//! | [`disco`] | Single repeating recolor timer lifecycle |
//! | [`viewport`] | Client to canvas-local coordinate conversion |
//! | [`config`] | Tunables and their defaults |
//! | [`consts`] | Shared constants (palette, border inset, disco beat) |

pub mod config;
pub mod consts;
pub mod disco;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod palette;
pub mod render;
pub mod viewport;
