/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Collapses the panel, e.g. after one of its links was followed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn closed(mut self) -> Self {
        self.close();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [MenuState::default(), MenuState::default().toggled()] {
            let mut menu = start;
            menu.toggle();
            assert_ne!(menu, start);
            menu.toggle();
            assert_eq!(menu, start);
        }
    }

    #[test]
    fn test_close_from_any_state() {
        assert!(!MenuState::default().closed().is_open());
        assert!(!MenuState::default().toggled().closed().is_open());
    }

    #[test]
    fn test_open_then_follow_link() {
        let menu = MenuState::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.closed().is_open());
    }
}
