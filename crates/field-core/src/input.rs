use crate::field::FieldMode;
use crate::host::InputBatch;

/// Input the animator understands, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    Click { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
    Key { key: String, shift: bool },
}

/// Events written by listeners and drained once per frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: InputBatch,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> InputBatch {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Map a key press to the field mode it toggles.
///
/// Mode keys need Shift; with Shift held browsers report either case.
#[inline]
pub fn mode_for_key(key: &str, shift: bool) -> Option<FieldMode> {
    match (key, shift) {
        ("g" | "G", true) => Some(FieldMode::Geometry),
        ("s" | "S", true) => Some(FieldMode::Spiral),
        ("r" | "R", true) => Some(FieldMode::Resonance),
        ("Escape", _) => Some(FieldMode::Drift),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        q.push(InputEvent::Key {
            key: "G".into(),
            shift: true,
        });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
        assert_eq!(events[0], InputEvent::PointerMove { x: 1.0, y: 2.0 });
    }

    #[test]
    fn mode_keys_need_shift() {
        assert_eq!(mode_for_key("G", true), Some(FieldMode::Geometry));
        assert_eq!(mode_for_key("g", true), Some(FieldMode::Geometry));
        assert_eq!(mode_for_key("S", true), Some(FieldMode::Spiral));
        assert_eq!(mode_for_key("R", true), Some(FieldMode::Resonance));
        assert_eq!(mode_for_key("g", false), None);
        assert_eq!(mode_for_key("s", false), None);
        assert_eq!(mode_for_key("r", false), None);
    }

    #[test]
    fn escape_returns_to_drift() {
        assert_eq!(mode_for_key("Escape", false), Some(FieldMode::Drift));
        assert_eq!(mode_for_key("Escape", true), Some(FieldMode::Drift));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        for key in ["", "a", "H", "Enter", " ", "ArrowUp"] {
            assert_eq!(mode_for_key(key, true), None, "key {key:?}");
        }
    }
}
