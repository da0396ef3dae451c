use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use synapse_engine::{CursorFollower, FrameLoop};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::listeners::pointer_position;
use crate::scheduler::AnimationFrameScheduler;

struct CursorState {
    follower: CursorFollower,
    head: HtmlElement,
    trail: Option<HtmlElement>,
    frame_loop: FrameLoop<AnimationFrameScheduler>,
}

impl CursorState {
    fn frame(&mut self) {
        let Self {
            follower,
            head,
            trail,
            frame_loop,
        } = self;
        frame_loop.on_frame(|| {
            follower.step();
            place(head, follower.head().x, follower.head().y);
            if let Some(trail) = trail {
                place(trail, follower.trail().x, follower.trail().y);
            }
        });
    }
}

fn place(element: &HtmlElement, x: f32, y: f32) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));
}

fn find(selector: &str) -> Option<HtmlElement> {
    gloo::utils::document()
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Custom cursor: a dot and an optional trailing ring that ease toward the
/// mouse every frame. Dropping it stops the loop and the listener.
#[wasm_bindgen]
pub struct NeuralCursor {
    state: Rc<RefCell<CursorState>>,
    listener: Option<EventListener>,
}

#[wasm_bindgen]
impl NeuralCursor {
    /// Drive the element matching `cursor_selector`, and `trail_selector` if
    /// given. Returns `undefined` when the cursor element is missing.
    pub fn create(cursor_selector: &str, trail_selector: Option<String>) -> Option<NeuralCursor> {
        crate::init_logging();

        let Some(head) = find(cursor_selector) else {
            log::warn!("synapse: no element matches {}, cursor disabled", cursor_selector);
            return None;
        };
        let trail = trail_selector.as_deref().and_then(find);

        let state = Rc::new_cyclic(|weak: &Weak<RefCell<CursorState>>| {
            let weak = weak.clone();
            let scheduler = AnimationFrameScheduler::new(move |_timestamp| {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().frame();
                }
            });
            RefCell::new(CursorState {
                follower: CursorFollower::new(),
                head,
                trail,
                frame_loop: FrameLoop::new(scheduler),
            })
        });

        let listener = {
            let weak = Rc::downgrade(&state);
            EventListener::new(&gloo::utils::document(), "mousemove", move |event: &Event| {
                let Some((x, y)) = pointer_position(event) else {
                    return;
                };
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().follower.pointer_move(x, y);
                }
            })
        };

        state.borrow_mut().frame_loop.start();
        Some(NeuralCursor {
            state,
            listener: Some(listener),
        })
    }

    pub fn stop(&mut self) {
        self.listener = None;
        self.state.borrow_mut().frame_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().frame_loop.is_running()
    }
}

impl Drop for NeuralCursor {
    fn drop(&mut self) {
        self.stop();
    }
}
