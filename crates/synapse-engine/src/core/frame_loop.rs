/// Host hook for "call me again on the next display refresh".
///
/// In the browser this is `requestAnimationFrame`; a native host could back
/// it with a render thread that sleeps to the refresh rate.
pub trait FrameScheduler {
    type Handle;

    /// Queue one future frame callback. `None` means the host refused,
    /// which ends the loop.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Cancel a previously queued callback.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Self-rescheduling frame loop.
///
/// Each frame runs its step, then requests exactly one more frame. There is
/// no fixed-rate timer: if a step never returns, no further frame is asked for.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    /// Request the first frame. No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.request_next();
    }

    /// Called from the host's frame callback. Runs `step` and queues the
    /// next frame, unless the loop was stopped in the meantime.
    pub fn on_frame<R>(&mut self, step: impl FnOnce() -> R) -> Option<R> {
        // The handle that woke us is spent.
        self.pending = None;
        if !self.running {
            return None;
        }
        let out = step();
        self.frames += 1;
        self.request_next();
        Some(out)
    }

    /// Cancel the pending frame and stop rescheduling.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a frame callback is currently queued.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Frames completed since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn request_next(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::warn!("frame loop: host refused the next frame, stopping");
                self.running = false;
            }
        }
    }
}
