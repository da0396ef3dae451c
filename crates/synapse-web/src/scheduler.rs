use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use synapse_engine::FrameScheduler;

/// [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// The handle is gloo's [`AnimationFrame`], which cancels the request when
/// dropped, so cancelling is just dropping it.
pub struct AnimationFrameScheduler {
    on_frame: Rc<dyn Fn(f64)>,
}

impl AnimationFrameScheduler {
    pub fn new(on_frame: impl Fn(f64) + 'static) -> Self {
        Self {
            on_frame: Rc::new(on_frame),
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = AnimationFrame;

    fn request_frame(&mut self) -> Option<AnimationFrame> {
        let on_frame = Rc::clone(&self.on_frame);
        Some(request_animation_frame(move |timestamp| on_frame(timestamp)))
    }

    fn cancel_frame(&mut self, handle: AnimationFrame) {
        drop(handle);
    }
}
