//! Cursor-plus-open-item list shared by the recipe, FAQ, product and image
//! widgets. The cursor moves over the items; at most one item is open.

#[derive(Debug, Clone)]
pub struct Picker<T> {
    items: Vec<T>,
    cursor: usize,
    open: Option<usize>,
}

impl<T> Picker<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            open: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn opened(&self) -> Option<&T> {
        self.open.and_then(|i| self.items.get(i))
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Open the item under the cursor (replacing any open item)
    pub fn open_cursor(&mut self) {
        if self.cursor < self.items.len() {
            self.open = Some(self.cursor);
        }
    }

    /// Open the item under the cursor, or close it if it is already open
    pub fn toggle_cursor(&mut self) {
        if self.open == Some(self.cursor) {
            self.open = None;
        } else {
            self.open_cursor();
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps() {
        let mut picker = Picker::new(vec!["a", "b"]);
        picker.cursor_prev();
        assert_eq!(picker.cursor(), 0);
        picker.cursor_next();
        picker.cursor_next();
        assert_eq!(picker.cursor(), 1);
    }

    #[test]
    fn test_open_replaces_and_close() {
        let mut picker = Picker::new(vec!["pasta", "omelette"]);
        assert_eq!(picker.opened(), None);
        picker.open_cursor();
        assert_eq!(picker.opened(), Some(&"pasta"));
        picker.cursor_next();
        picker.open_cursor();
        assert_eq!(picker.opened(), Some(&"omelette"));
        picker.close();
        assert_eq!(picker.open_index(), None);
    }

    #[test]
    fn test_toggle_collapses_same_item() {
        let mut picker = Picker::new(vec!["q1", "q2"]);
        picker.toggle_cursor();
        assert_eq!(picker.open_index(), Some(0));
        picker.toggle_cursor();
        assert_eq!(picker.open_index(), None);
        picker.toggle_cursor();
        picker.cursor_next();
        picker.toggle_cursor();
        assert_eq!(picker.open_index(), Some(1));
    }

    #[test]
    fn test_empty_list_never_opens() {
        let mut picker: Picker<&str> = Picker::new(Vec::new());
        picker.open_cursor();
        picker.toggle_cursor();
        assert_eq!(picker.opened(), None);
    }
}
