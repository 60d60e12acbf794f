/// Show/hide switch for a fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub visible: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl ToggleState {
    pub const MESSAGE: &'static str = "This is a toggleable message.";

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn message(&self) -> Option<&'static str> {
        self.visible.then_some(Self::MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut toggle = ToggleState::default();
        assert_eq!(toggle.message(), Some(ToggleState::MESSAGE));
        toggle.toggle();
        assert_eq!(toggle.message(), None);
        toggle.toggle();
        assert!(toggle.visible);
    }
}
