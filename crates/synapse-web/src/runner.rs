use synapse_engine::{
    Field, FieldConfig, FrameLoop, FrameScheduler, FrameStats, InputEvent, InputQueue, Surface,
};

/// Owns a field, the surface it draws on and the loop that drives it.
///
/// Browser listeners push events at any time between frames; [`on_frame`](Self::on_frame)
/// applies them in arrival order before stepping, so all mutation happens on
/// the frame path. Once the loop is no longer running, input is dropped
/// instead of queued.
pub struct FieldRunner<S: Surface, F: FrameScheduler> {
    field: Field,
    surface: S,
    input: InputQueue,
    last_stats: FrameStats,
    frame_loop: FrameLoop<F>,
}

impl<S: Surface, F: FrameScheduler> FieldRunner<S, F> {
    /// Size the surface to the viewport and build the field. The loop is idle
    /// until [`start`](Self::start).
    pub fn new(mut surface: S, scheduler: F, config: FieldConfig, width: f32, height: f32) -> Self {
        let field = Field::create(&mut surface, config, width, height);
        Self {
            field,
            surface,
            input: InputQueue::new(),
            last_stats: FrameStats::default(),
            frame_loop: FrameLoop::new(scheduler),
        }
    }

    pub fn start(&mut self) {
        self.frame_loop.start();
    }

    /// Cancel the pending frame and discard queued input.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
        self.input.drain();
    }

    /// Queue an event for the next frame. Returns `false` and drops the event
    /// when no frame is coming to apply it.
    pub fn push_input(&mut self, event: InputEvent) -> bool {
        if !self.frame_loop.is_running() {
            self.input.drain();
            return false;
        }
        self.input.push(event);
        true
    }

    /// Frame callback: apply queued input, tick, and request the next frame.
    /// `None` when the loop has been stopped.
    pub fn on_frame(&mut self) -> Option<FrameStats> {
        let Self {
            field,
            surface,
            input,
            last_stats,
            frame_loop,
        } = self;
        let stats = frame_loop.on_frame(|| {
            for event in input.drain() {
                field.handle_input(&event, surface);
            }
            field.tick(surface)
        })?;
        *last_stats = stats;
        Some(stats)
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Frames completed since construction.
    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        self.frame_loop.scheduler()
    }

    /// What the most recent frame drew.
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}
