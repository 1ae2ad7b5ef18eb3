use eframe::egui::{Pos2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Primary button is down and the pointer has not moved yet.
    Pressed { anchor: Pos2 },
    /// The pointer moved while the button was held.
    Dragging { anchor: Pos2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Press and release without any motion in between.
    Tap,
    /// The release ended a drag.
    DragEnd,
    /// Release without a matching press.
    Ignored,
}

/// Distinguishes a tap from a drag-to-move gesture.
///
/// Positions are window-local. The anchor is the point grabbed at press
/// time; moving the window by `pointer - anchor` keeps that point under the
/// pointer.
#[derive(Debug, Default)]
pub struct DragGesture {
    state: GestureState,
}

impl DragGesture {
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn press(&mut self, pos: Pos2) {
        self.state = GestureState::Pressed { anchor: pos };
    }

    /// Pointer moved to `pos`. Returns the offset to move the window by, or
    /// `None` when no button is held or the pointer sits on the anchor.
    pub fn motion(&mut self, pos: Pos2) -> Option<Vec2> {
        let anchor = match self.state {
            GestureState::Idle => return None,
            GestureState::Pressed { anchor } | GestureState::Dragging { anchor } => anchor,
        };
        let delta = pos - anchor;
        if delta == Vec2::ZERO {
            return None;
        }
        self.state = GestureState::Dragging { anchor };
        Some(delta)
    }

    pub fn release(&mut self) -> Release {
        let outcome = match self.state {
            GestureState::Idle => Release::Ignored,
            GestureState::Pressed { .. } => Release::Tap,
            GestureState::Dragging { .. } => Release::DragEnd,
        };
        self.state = GestureState::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn press_release_is_tap() {
        let mut g = DragGesture::default();
        g.press(pos2(10.0, 10.0));
        assert_eq!(g.release(), Release::Tap);
        assert_eq!(g.state(), GestureState::Idle);
    }

    #[test]
    fn motion_on_anchor_keeps_tap() {
        let mut g = DragGesture::default();
        g.press(pos2(10.0, 10.0));
        assert_eq!(g.motion(pos2(10.0, 10.0)), None);
        assert_eq!(g.release(), Release::Tap);
    }

    #[test]
    fn drag_reports_delta_from_anchor() {
        let mut g = DragGesture::default();
        g.press(pos2(10.0, 10.0));
        assert_eq!(g.motion(pos2(14.0, 7.0)), Some(Vec2::new(4.0, -3.0)));
        // pointer back on the anchor once the window followed
        assert_eq!(g.motion(pos2(10.0, 10.0)), None);
        assert_eq!(g.state(), GestureState::Dragging { anchor: pos2(10.0, 10.0) });
        assert_eq!(g.release(), Release::DragEnd);
    }

    #[test]
    fn motion_without_press() {
        let mut g = DragGesture::default();
        assert_eq!(g.motion(pos2(3.0, 3.0)), None);
        assert_eq!(g.release(), Release::Ignored);
    }
}
