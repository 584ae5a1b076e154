//! Input model: the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Each active variant carries the context the engine needs to
//! update the scene on every move and to finish the gesture on release.
//! Outside of a press the machine sits in `Idle` and pointer moves are ignored.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::Triangle;
use crate::viewport::Point;

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is stretching out a new triangle from an empty spot.
    Stretching {
        /// Canvas-local point where the press started.
        start: Point,
        /// Uncommitted triangle spanning `start` to the latest pointer position.
        preview: Triangle,
    },
    /// The user is moving an existing triangle.
    Dragging {
        /// Store index of the dragged triangle (always the topmost).
        index: usize,
        /// Pointer position minus the triangle's center at press time.
        offset: Point,
    },
}

impl InputState {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The uncommitted triangle to draw on top of the store, if stretching.
    #[must_use]
    pub fn preview(&self) -> Option<&Triangle> {
        match self {
            Self::Stretching { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Short label for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Stretching { .. } => "stretching",
            Self::Dragging { .. } => "dragging",
        }
    }
}
