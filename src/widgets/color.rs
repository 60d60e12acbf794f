//! Hex color picker: a `#rrggbb` draft and the last color that parsed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (leading `#` optional, case-insensitive)
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Color picker state (rendering-agnostic)
#[derive(Debug, Clone)]
pub struct ColorPicker {
    pub draft: String,
    color: Rgb,
}

impl ColorPicker {
    pub fn new(initial: Rgb) -> Self {
        Self {
            draft: initial.to_string(),
            color: initial,
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Edit the draft; the selected color follows whenever it parses
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
        if let Some(color) = Rgb::parse(text) {
            self.color = color;
        }
    }

    pub fn draft_is_valid(&self) -> bool {
        Rgb::parse(&self.draft).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Rgb::parse("#ffffff"), Some(Rgb(255, 255, 255)));
        assert_eq!(Rgb::parse("1A2b3C"), Some(Rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(Rgb::parse("#fff"), None);
        assert_eq!(Rgb::parse("#gg0000"), None);
        assert_eq!(Rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn test_color_follows_valid_drafts_only() {
        let mut picker = ColorPicker::new(Rgb(255, 255, 255));
        assert_eq!(picker.draft, "#ffffff");

        picker.set_draft("#00ff");
        assert!(!picker.draft_is_valid());
        assert_eq!(picker.color(), Rgb(255, 255, 255));

        picker.set_draft("#00ff00");
        assert_eq!(picker.color(), Rgb(0, 255, 0));
    }
}
