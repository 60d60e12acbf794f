//! Single-field form with a presence check.

pub const NAME_REQUIRED: &str = "Name is required";

#[derive(Debug, Clone, Default)]
pub struct NameForm {
    pub name: String,
    error: Option<String>,
    greeting: Option<String>,
}

impl NameForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    /// Blank names set the error; anything else clears it and greets
    pub fn submit(&mut self) -> bool {
        if self.name.trim().is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            self.greeting = None;
            return false;
        }
        self.error = None;
        self.greeting = Some(format!("Hello, {}!", self.name));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let mut form = NameForm::new();
        form.set_name("   ");
        assert!(!form.submit());
        assert_eq!(form.error(), Some(NAME_REQUIRED));
        assert_eq!(form.greeting(), None);
    }

    #[test]
    fn test_valid_name_clears_error() {
        let mut form = NameForm::new();
        form.submit();
        form.set_name("Ada");
        assert!(form.submit());
        assert_eq!(form.error(), None);
        assert_eq!(form.greeting(), Some("Hello, Ada!"));
    }
}
