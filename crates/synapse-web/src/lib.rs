pub mod canvas;
pub mod cursor;
pub mod listeners;
pub mod preference;
pub mod runner;
pub mod scheduler;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use synapse_engine::{ColorScheme, FieldConfig, InputEvent, Rgba, Theme};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, Window};

pub use canvas::CanvasSurface;
pub use cursor::NeuralCursor;
pub use runner::FieldRunner;
pub use scheduler::AnimationFrameScheduler;

use listeners::{left_viewport, pointer_position, viewport_size};

type CanvasRunner = FieldRunner<CanvasSurface, AnimationFrameScheduler>;

fn with_runner(runner: &Weak<RefCell<CanvasRunner>>, f: impl FnOnce(&mut CanvasRunner)) {
    if let Some(runner) = runner.upgrade() {
        f(&mut runner.borrow_mut());
    }
}

/// Install the panic hook and console logger once per page.
fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Handle to a running particle background.
///
/// Returned by [`NeuralField::create`]; keep it to retint or stop the field.
/// Dropping it (`free()` from JS) stops the loop and removes the listeners.
#[wasm_bindgen]
pub struct NeuralField {
    window: Window,
    runner: Rc<RefCell<CanvasRunner>>,
    listeners: Vec<EventListener>,
    theme: Theme,
}

#[wasm_bindgen]
impl NeuralField {
    /// Start a field on the canvas with id `canvas_id`.
    ///
    /// `config_json` takes the camelCase keys of `FieldConfig`; malformed JSON
    /// is logged and replaced by defaults. Returns `undefined` when the canvas
    /// is missing or has no 2D context.
    pub fn create(canvas_id: &str, config_json: Option<String>) -> Option<NeuralField> {
        init_logging();

        let window = gloo::utils::window();
        let canvas = gloo::utils::document()
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let Some(surface) = CanvasSurface::new(canvas) else {
            log::warn!("synapse: #{} has no 2d context, background disabled", canvas_id);
            return None;
        };

        let mut config = parse_config(config_json.as_deref());
        if config.seed.is_none() {
            config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u64);
        }
        let stored = preference::stored_theme(&window);
        let explicit = preference::supplies_colors(config_json.as_deref());
        let scheme = preference::initial_scheme(&config, explicit, stored);
        let theme = preference::initial_theme(scheme, stored);
        let config = config.with_color_scheme(scheme);

        let (width, height) = viewport_size(&window);
        let runner = Rc::new_cyclic(|weak: &Weak<RefCell<CanvasRunner>>| {
            let weak = weak.clone();
            let scheduler = AnimationFrameScheduler::new(move |_timestamp| {
                with_runner(&weak, |r| {
                    r.on_frame();
                });
            });
            RefCell::new(FieldRunner::new(surface, scheduler, config, width, height))
        });

        let listeners = register_listeners(&window, &runner);
        runner.borrow_mut().start();
        log::info!(
            "synapse: started {} particles on {}x{}",
            runner.borrow().field().len(),
            width,
            height
        );

        Some(NeuralField {
            window,
            runner,
            listeners,
            theme,
        })
    }

    /// Retint from two CSS color strings. Takes effect on the next frame.
    pub fn set_color_scheme(&self, particle_color: &str, line_color: &str) -> Result<(), JsValue> {
        let particle: Rgba = particle_color
            .parse()
            .map_err(|e| JsValue::from_str(&format!("particle color: {}", e)))?;
        let line: Rgba = line_color
            .parse()
            .map_err(|e| JsValue::from_str(&format!("line color: {}", e)))?;
        self.push(InputEvent::SetColorScheme(ColorScheme::new(particle, line)));
        Ok(())
    }

    /// Switch to the dark or light preset without persisting.
    pub fn set_theme(&mut self, dark: bool) {
        self.theme = Theme::from_dark(dark);
        self.push(InputEvent::SetColorScheme(self.theme.scheme()));
    }

    /// Flip dark/light, persist the choice, and return whether it is now dark.
    pub fn toggle_theme(&mut self) -> bool {
        let theme = self.theme.toggle();
        self.set_theme(theme == Theme::Dark);
        preference::store_theme(&self.window, theme);
        theme == Theme::Dark
    }

    /// Cancel the pending frame and detach every listener.
    pub fn stop(&mut self) {
        self.listeners.clear();
        let mut runner = self.runner.borrow_mut();
        if runner.is_running() {
            runner.stop();
            log::info!("synapse: stopped after {} frames", runner.frames());
        }
    }

    pub fn is_running(&self) -> bool {
        self.runner.borrow().is_running()
    }

    pub fn particle_count(&self) -> u32 {
        self.runner.borrow().field().len() as u32
    }

    /// Connections drawn in the most recent frame.
    pub fn connection_count(&self) -> u32 {
        self.runner.borrow().last_stats().connections as u32
    }
}

impl NeuralField {
    fn push(&self, event: InputEvent) {
        if !self.runner.borrow_mut().push_input(event) {
            log::debug!("synapse: not running, dropped {:?}", event);
        }
    }
}

impl Drop for NeuralField {
    fn drop(&mut self) {
        self.stop();
    }
}

fn parse_config(json: Option<&str>) -> FieldConfig {
    let Some(json) = json else {
        return FieldConfig::default();
    };
    FieldConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("synapse: {}, using defaults", e);
        FieldConfig::default()
    })
}

fn register_listeners(window: &Window, runner: &Rc<RefCell<CanvasRunner>>) -> Vec<EventListener> {
    let resize = {
        let weak = Rc::downgrade(runner);
        let viewport = window.clone();
        EventListener::new(window, "resize", move |_event: &Event| {
            let (width, height) = viewport_size(&viewport);
            with_runner(&weak, |r| {
                r.push_input(InputEvent::Resize { width, height });
            });
        })
    };

    let pointer_move = {
        let weak = Rc::downgrade(runner);
        EventListener::new(window, "mousemove", move |event: &Event| {
            if let Some((x, y)) = pointer_position(event) {
                with_runner(&weak, |r| {
                    r.push_input(InputEvent::PointerMove { x, y });
                });
            }
        })
    };

    let pointer_leave = {
        let weak = Rc::downgrade(runner);
        EventListener::new(window, "mouseout", move |event: &Event| {
            if left_viewport(event) {
                with_runner(&weak, |r| {
                    r.push_input(InputEvent::PointerLeave);
                });
            }
        })
    };

    vec![resize, pointer_move, pointer_leave]
}
