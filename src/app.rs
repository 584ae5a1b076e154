//! Bridge between the page and the imperative `canvas::engine::Engine`.
//!
//! The app owns the engine and the disco interval. DOM listeners live for the
//! whole page, so their closures are leaked with `forget()`; each one borrows
//! the engine only for the duration of a single event.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use canvas::config::Config;
use canvas::disco::Disco;
use canvas::engine::{Action, Engine};
use canvas::viewport::Point;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, MouseEvent};

use crate::dom::Page;
use crate::error::HostError;

pub struct App {
    page: Page,
    engine: RefCell<Engine>,
    disco: RefCell<Disco<Interval>>,
    disco_interval_ms: u32,
}

impl App {
    /// Build the engine on the page's canvas, style the page, and wire every listener.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the canvas is missing or a listener cannot be attached.
    pub fn mount(config: Config) -> Result<Rc<Self>, HostError> {
        let page = Page::locate()?;
        let disco_interval_ms = config.disco_interval_ms;
        let border = config.border_inset;
        let engine = Engine::new(page.canvas.clone(), config)?;
        page.apply_theme(engine.core.background(), border)?;

        let app = Rc::new(Self {
            page,
            engine: RefCell::new(engine),
            disco: RefCell::new(Disco::new()),
            disco_interval_ms,
        });
        app.wire_pointer()?;
        app.wire_buttons()?;
        log::info!("trianglepad mounted");
        Ok(app)
    }

    /// Presses, moves and double-clicks are taken on the canvas. Releases are
    /// taken on the window so a gesture ends even when the button comes up
    /// outside the canvas.
    fn wire_pointer(self: &Rc<Self>) -> Result<(), HostError> {
        let canvas: &EventTarget = self.page.canvas.as_ref();
        let window: &EventTarget = self.page.window.as_ref();
        self.on_mouse(canvas, "mousedown", |engine, ev| engine.on_pointer_down(client_point(ev)))?;
        self.on_mouse(canvas, "mousemove", |engine, ev| {
            engine.on_pointer_move_with_buttons(client_point(ev), ev.buttons())
        })?;
        self.on_mouse(window, "mouseup", |engine, ev| engine.on_pointer_up(client_point(ev)))?;
        self.on_mouse(canvas, "dblclick", |engine, ev| engine.on_double_click(client_point(ev)))?;
        Ok(())
    }

    fn wire_buttons(self: &Rc<Self>) -> Result<(), HostError> {
        let buttons: [(&Option<web_sys::HtmlElement>, fn(&Rc<Self>)); 4] = [
            (&self.page.clear, Self::clear),
            (&self.page.random, Self::randomize),
            (&self.page.disco, Self::start_disco),
            (&self.page.stop, Self::stop_disco),
        ];
        for (button, handler) in buttons {
            let Some(button) = button else {
                continue;
            };
            let app = Rc::downgrade(self);
            let cb = Closure::wrap(Box::new(move || {
                if let Some(app) = app.upgrade() {
                    handler(&app);
                }
            }) as Box<dyn FnMut()>);
            button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
        Ok(())
    }

    fn on_mouse(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &str,
        handler: fn(&mut Engine, &MouseEvent) -> Vec<Action>,
    ) -> Result<(), HostError> {
        let app = Rc::downgrade(self);
        let cb = Closure::wrap(Box::new(move |ev: MouseEvent| {
            let Some(app) = app.upgrade() else {
                return;
            };
            app.dispatch(|engine| handler(engine, &ev));
        }) as Box<dyn FnMut(MouseEvent)>);
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }

    /// Run one engine operation and repaint if it asks for it.
    fn dispatch<F>(&self, op: F)
    where
        F: FnOnce(&mut Engine) -> Vec<Action>,
    {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            log::warn!("engine busy; dropping re-entrant event");
            return;
        };
        let actions = op(&mut engine);
        if let Err(err) = engine.apply(&actions) {
            log::error!("render failed: {err:?}");
        }
    }

    // --- Buttons ---

    fn clear(self: &Rc<Self>) {
        self.dispatch(Engine::clear);
    }

    fn randomize(self: &Rc<Self>) {
        log::info!("randomizing colours");
        self.dispatch(Engine::randomize);
    }

    fn start_disco(self: &Rc<Self>) {
        let app = Rc::downgrade(self);
        let started = self
            .disco
            .borrow_mut()
            .start(|| Interval::new(self.disco_interval_ms, move || disco_beat(&app)));
        if started {
            self.show_disco(true);
        }
    }

    fn stop_disco(self: &Rc<Self>) {
        if self.disco.borrow_mut().stop() {
            self.show_disco(false);
        }
    }

    fn show_disco(&self, running: bool) {
        if let Err(err) = self.page.show_disco_running(running) {
            log::warn!("could not toggle disco buttons: {err:?}");
        }
    }
}

fn client_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn disco_beat(app: &Weak<App>) {
    if let Some(app) = app.upgrade() {
        app.dispatch(Engine::disco_tick);
    }
}
