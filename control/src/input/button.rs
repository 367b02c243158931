//! Manage the pointer button's state.

/// Use this to hold the button state over time.
///
/// Detects the down and up edges between consecutive updates; drags start
/// on the former and end on the latter.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub clicked: bool,
    pub released: bool,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.clicked = !was_pressed && self.pressed;
        self.released = was_pressed && !self.pressed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_was_up_and_now_is_down_it_is_marked_as_clicked() {
        let mut button = Button::default();
        assert!(!button.clicked);
        button.update(true);
        assert!(button.clicked);
        button.update(true);
        assert!(!button.clicked);
        button.update(false);
        assert!(!button.clicked);
    }

    #[test]
    fn when_was_down_and_now_is_up_it_is_marked_as_released() {
        let mut button = Button::default();
        button.update(true);
        assert!(!button.released);
        button.update(false);
        assert!(button.released);
        button.update(false);
        assert!(!button.released);
    }

    #[test]
    fn when_held_down_neither_edge_is_reported() {
        let mut button = Button::default();
        button.update(true);
        button.update(true);
        button.update(true);
        assert!(button.pressed);
        assert!(!button.clicked);
        assert!(!button.released);
    }
}
