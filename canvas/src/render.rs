//! Rendering: full clear-and-replay of the triangle list.
//!
//! There is no dirty-rect tracking. Every call clears the whole surface and
//! fills each triangle in store order, so later triangles paint over earlier
//! ones. The only place that touches [`web_sys::CanvasRenderingContext2d`] is
//! its [`Surface`] impl below.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::doc::Triangle;

/// A 2D drawing target that can be cleared and filled with triangles.
pub trait Surface {
    type Error;

    /// Erase the entire surface.
    ///
    /// # Errors
    ///
    /// Implementation-defined drawing failure.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fill the closed path `p0 -> p1 -> p2` with the triangle's colour.
    ///
    /// # Errors
    ///
    /// Implementation-defined drawing failure.
    fn fill_triangle(&mut self, triangle: &Triangle) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        let (width, height) = self
            .canvas()
            .map_or((0.0, 0.0), |c| (f64::from(c.width()), f64::from(c.height())));
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_triangle(&mut self, triangle: &Triangle) -> Result<(), JsValue> {
        self.begin_path();
        self.move_to(triangle.p0.x, triangle.p0.y);
        self.line_to(triangle.p1.x, triangle.p1.y);
        self.line_to(triangle.p2.x, triangle.p2.y);
        self.close_path();
        self.set_fill_style_str(&triangle.colour);
        self.fill();
        Ok(())
    }
}

/// Draw the full scene: stored triangles bottom-first, then the stretch preview.
///
/// # Errors
///
/// Returns the surface's error if any drawing call fails.
pub fn draw<S>(surface: &mut S, triangles: &[Triangle], preview: Option<&Triangle>) -> Result<(), S::Error>
where
    S: Surface + ?Sized,
{
    log::debug!("re-rendering canvas ({} triangles)", triangles.len());

    surface.clear()?;
    for triangle in triangles {
        surface.fill_triangle(triangle)?;
    }
    if let Some(preview) = preview {
        surface.fill_triangle(preview)?;
    }
    Ok(())
}
