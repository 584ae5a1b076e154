use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{Config, ConfigError};
use crate::doc::{StoreError, Triangle, TriangleStore, is_drawable_drag};
use crate::input::InputState;
use crate::palette::Palette;
use crate::render;
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A stretch gesture committed a new triangle on top of the store.
    TriangleCreated(Triangle),
    /// The triangle at `index` was repositioned by a drag.
    TriangleMoved { index: usize },
    /// A double-click removed the triangle that was at `index`.
    TriangleDeleted { index: usize, triangle: Triangle },
    /// Every triangle was removed.
    Cleared,
    /// Every triangle received a new colour.
    Recolored,
    /// The scene changed and must be redrawn.
    RenderNeeded,
}

/// Whether any action in `actions` asks for a redraw.
#[must_use]
pub fn needs_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

/// Engine state and logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub store: TriangleStore,
    pub input: InputState,
    pub palette: Palette,
    pub viewport: Viewport,
    pub config: Config,
    rng: SmallRng,
}

impl EngineCore {
    /// Build an engine from a validated config, seeding colour choices with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config fails validation.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let palette = Palette::with_random_background(&config.palette, &mut rng)?;
        let viewport = Viewport { border: config.border_inset, ..Viewport::default() };
        log::debug!("engine ready, background {}", palette.background());
        Ok(Self { store: TriangleStore::new(), input: InputState::Idle, palette, viewport, config, rng })
    }

    // --- Pointer input ---

    /// Pointer pressed. Starts a drag on a hit, otherwise starts stretching a new triangle.
    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client);

        if !self.input.is_idle() {
            log::warn!("pointer down while {}; abandoning previous gesture", self.input.name());
            self.input = InputState::Idle;
        }

        let Some((hit_index, _)) = self.store.topmost_hit_at(pt) else {
            let colour = self.palette.pick(&mut self.rng);
            self.input = InputState::Stretching { start: pt, preview: Triangle::collapsed(pt, colour) };
            return vec![Action::RenderNeeded];
        };

        log::debug!("hit triangle {hit_index}");
        let index = match self.store.bring_to_front(hit_index) {
            Ok(index) => index,
            Err(err) => return self.contract_violation(&err),
        };
        let Some(triangle) = self.store.get(index) else {
            return self.contract_violation(&StoreError::IndexOutOfRange { index, len: self.store.len() });
        };
        let center = triangle.center();
        let offset = Point::new(pt.x - center.x, pt.y - center.y);
        self.input = InputState::Dragging { index, offset };
        vec![Action::RenderNeeded]
    }

    /// Pointer moved. Only does anything while a press is active.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client);

        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Stretching { start, preview } => {
                let colour = std::mem::take(&mut preview.colour);
                *preview = Triangle::from_drag(*start, pt, colour);
                vec![Action::RenderNeeded]
            }
            InputState::Dragging { index, offset } => {
                let (index, offset) = (*index, *offset);
                let center = Point::new(pt.x - offset.x, pt.y - offset.y);
                let Some(triangle) = self.store.get_mut(index) else {
                    return self.contract_violation(&StoreError::IndexOutOfRange { index, len: self.store.len() });
                };
                triangle.move_center_to(center);
                vec![Action::TriangleMoved { index }, Action::RenderNeeded]
            }
        }
    }

    /// Pointer moved with the DOM `buttons` bitmask. A gesture whose release
    /// was missed (no button held any more) ends here as if released.
    pub fn on_pointer_move_with_buttons(&mut self, client: Point, buttons: u16) -> Vec<Action> {
        if buttons == 0 && !self.input.is_idle() {
            log::debug!("release missed while {}; ending gesture", self.input.name());
            return self.on_pointer_up(client);
        }
        self.on_pointer_move(client)
    }

    /// Pointer released. Commits a stretched triangle or ends a drag.
    pub fn on_pointer_up(&mut self, client: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client);

        match std::mem::take(&mut self.input) {
            InputState::Idle => {
                log::debug!("pointer released without a press on the canvas");
                Vec::new()
            }
            InputState::Stretching { start, preview } => {
                if !is_drawable_drag(start, pt) {
                    log::debug!("click");
                    return vec![Action::RenderNeeded];
                }
                let triangle = Triangle::from_drag(start, pt, preview.colour);
                self.store.append(triangle.clone());
                log::debug!("triangle created ({} total)", self.store.len());
                vec![Action::TriangleCreated(triangle), Action::RenderNeeded]
            }
            InputState::Dragging { index, .. } => {
                log::debug!("drag of triangle {index} finished");
                Vec::new()
            }
        }
    }

    /// Double-click. Deletes the topmost triangle under the pointer.
    pub fn on_double_click(&mut self, client: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client);

        let Some((index, _)) = self.store.topmost_hit_at(pt) else {
            log::debug!("no triangle there");
            return Vec::new();
        };
        match self.store.remove_at(index) {
            Ok(triangle) => {
                log::debug!("deleted triangle {index}");
                vec![Action::TriangleDeleted { index, triangle }, Action::RenderNeeded]
            }
            Err(err) => self.contract_violation(&err),
        }
    }

    // --- Commands ---

    /// Remove every triangle and abandon any gesture in progress.
    pub fn clear(&mut self) -> Vec<Action> {
        self.store.clear();
        self.input = InputState::Idle;
        log::info!("cleared canvas");
        vec![Action::Cleared, Action::RenderNeeded]
    }

    /// Give every stored triangle a fresh random fill.
    pub fn randomize(&mut self) -> Vec<Action> {
        let palette = &self.palette;
        let rng = &mut self.rng;
        self.store.recolor_with(|| palette.pick(&mut *rng));
        log::debug!("randomized {} colours", self.store.len());
        vec![Action::Recolored, Action::RenderNeeded]
    }

    /// One beat of disco mode.
    pub fn disco_tick(&mut self) -> Vec<Action> {
        self.randomize()
    }

    // --- Queries ---

    /// Triangles in draw order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        self.store.all()
    }

    /// The uncommitted triangle being stretched, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Triangle> {
        self.input.preview()
    }

    /// Colour reserved for the page background.
    #[must_use]
    pub fn background(&self) -> &str {
        self.palette.background()
    }

    /// Draw the scene to any surface.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if a drawing call fails.
    pub fn render_to<S>(&self, surface: &mut S) -> Result<(), S::Error>
    where
        S: render::Surface + ?Sized,
    {
        render::draw(surface, self.store.all(), self.input.preview())
    }

    fn contract_violation(&mut self, err: &StoreError) -> Vec<Action> {
        log::error!("triangle store contract violated: {err}");
        debug_assert!(false, "triangle store contract violated: {err}");
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or the config is invalid.
    pub fn new(canvas: HtmlCanvasElement, config: Config) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let seed = js_sys::Math::random().to_bits();
        let core = EngineCore::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut engine = Self { canvas, ctx, core };
        engine.sync_viewport();
        Ok(engine)
    }

    /// Re-read the canvas element's page offsets for pointer conversion.
    pub fn sync_viewport(&mut self) {
        self.core
            .viewport
            .set_offsets(f64::from(self.canvas.offset_left()), f64::from(self.canvas.offset_top()));
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        self.sync_viewport();
        self.core.on_pointer_down(client)
    }

    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        self.core.on_pointer_move(client)
    }

    pub fn on_pointer_move_with_buttons(&mut self, client: Point, buttons: u16) -> Vec<Action> {
        self.core.on_pointer_move_with_buttons(client, buttons)
    }

    pub fn on_pointer_up(&mut self, client: Point) -> Vec<Action> {
        self.core.on_pointer_up(client)
    }

    pub fn on_double_click(&mut self, client: Point) -> Vec<Action> {
        self.sync_viewport();
        self.core.on_double_click(client)
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    pub fn randomize(&mut self) -> Vec<Action> {
        self.core.randomize()
    }

    pub fn disco_tick(&mut self) -> Vec<Action> {
        self.core.disco_tick()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.render_to(&mut self.ctx)
    }

    /// Render if any of `actions` asks for it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn apply(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        if needs_render(actions) {
            self.render()?;
        }
        Ok(())
    }
}
