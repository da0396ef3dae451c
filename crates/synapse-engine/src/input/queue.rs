use crate::theme::ColorScheme;

/// Host events the field reacts to.
/// Browser callbacks push these; the frame step applies them before drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer left the viewport.
    PointerLeave,
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
    /// Retint future draws.
    SetColorScheme(ColorScheme),
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from a browser event listener).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order and clear the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerLeave);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(
            events,
            vec![InputEvent::PointerMove { x: 10.0, y: 20.0 }, InputEvent::PointerLeave]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn drain_on_empty_queue() {
        let mut q = InputQueue::default();
        assert!(q.drain().is_empty());
    }
}
