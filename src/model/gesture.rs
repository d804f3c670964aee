//! Drag gesture lifecycle
//!
//! A gesture is either idle or dragging. Displacement is measured as
//! `start_y - current_y`, so a positive value means the pointer moved up.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The pointer was pressed at `y`
    Started { y: f64 },
    /// The pointer moved to `y` while pressed
    Moved { y: f64 },
    /// The pointer was released
    Ended,
}

/// What a gesture update produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing observable happened
    Ignored,
    /// A drag began at the given anchor
    Anchored,
    /// The live displacement changed
    Displaced(f64),
    /// The drag finished with the given final displacement
    Released(f64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        start_y: f64,
        diff_y: f64,
    },
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn start_y(&self) -> Option<f64> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { start_y, .. } => Some(*start_y),
        }
    }

    /// Live displacement; zero when idle
    pub fn diff_y(&self) -> f64 {
        match self {
            Gesture::Idle => 0.0,
            Gesture::Dragging { diff_y, .. } => *diff_y,
        }
    }

    pub fn update(&mut self, message: Message) -> Outcome {
        match (*self, message) {
            (Gesture::Idle, Message::Started { y }) => {
                *self = Gesture::Dragging {
                    start_y: y,
                    diff_y: 0.0,
                };
                Outcome::Anchored
            }
            (Gesture::Dragging { start_y, .. }, Message::Started { y }) => {
                // A second press keeps the first anchor
                tracing::debug!(start_y, y, "ignoring overlapping gesture start");
                Outcome::Ignored
            }
            (Gesture::Dragging { start_y, .. }, Message::Moved { y }) => {
                let diff_y = start_y - y;
                *self = Gesture::Dragging { start_y, diff_y };
                Outcome::Displaced(diff_y)
            }
            (Gesture::Dragging { diff_y, .. }, Message::Ended) => {
                *self = Gesture::Idle;
                Outcome::Released(diff_y)
            }
            (Gesture::Idle, Message::Moved { .. } | Message::Ended) => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_gesture_default_is_idle() {
        let gesture = Gesture::default();
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.start_y(), None);
        assert_eq!(gesture.diff_y(), 0.0);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut gesture = Gesture::default();

        assert_eq!(gesture.update(Message::Started { y: 500.0 }), Outcome::Anchored);
        assert_eq!(gesture.start_y(), Some(500.0));

        assert_eq!(
            gesture.update(Message::Moved { y: 350.0 }),
            Outcome::Displaced(150.0)
        );
        assert_eq!(
            gesture.update(Message::Moved { y: 620.0 }),
            Outcome::Displaced(-120.0)
        );

        assert_eq!(gesture.update(Message::Ended), Outcome::Released(-120.0));
        assert_eq!(gesture, Gesture::Idle);
    }

    #[test]
    fn test_zero_coordinate_is_a_valid_anchor() {
        let mut gesture = Gesture::default();
        gesture.update(Message::Started { y: 0.0 });
        assert!(gesture.is_dragging());
        assert_eq!(
            gesture.update(Message::Moved { y: -40.0 }),
            Outcome::Displaced(40.0)
        );
    }

    #[test]
    fn test_move_and_end_while_idle_are_ignored() {
        let mut gesture = Gesture::default();
        assert_eq!(gesture.update(Message::Moved { y: 10.0 }), Outcome::Ignored);
        assert_eq!(gesture.update(Message::Ended), Outcome::Ignored);
        assert_eq!(gesture, Gesture::Idle);
    }

    #[test]
    fn test_overlapping_start_keeps_first_anchor() {
        let mut gesture = Gesture::default();
        gesture.update(Message::Started { y: 500.0 });
        gesture.update(Message::Moved { y: 450.0 });

        assert_eq!(gesture.update(Message::Started { y: 100.0 }), Outcome::Ignored);
        assert_eq!(
            gesture,
            Gesture::Dragging {
                start_y: 500.0,
                diff_y: 50.0
            }
        );
    }
}
