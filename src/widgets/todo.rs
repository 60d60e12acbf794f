//! Todo list: a draft line plus an ordered list of tasks.

/// A single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

/// Todo list state (rendering-agnostic)
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    /// Text being typed for the next task
    pub draft: String,
    items: Vec<TodoItem>,
    /// Cursor used by the terminal UI for toggle/remove
    selected: Option<usize>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Append the draft as a new task. Blank drafts are ignored.
    pub fn add(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        self.items.push(TodoItem { text, done: false });
        self.selected = Some(self.items.len() - 1);
        true
    }

    /// Flip the done flag of the task at `index`
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.done = !item.done;
        }
    }

    /// Remove the task at `index`, keeping the cursor on a valid row
    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        self.selected = match self.selected {
            _ if self.items.is_empty() => None,
            Some(sel) if sel >= self.items.len() => Some(self.items.len() - 1),
            other => other,
        };
    }

    pub fn toggle_selected(&mut self) {
        if let Some(index) = self.selected {
            self.toggle(index);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(index) = self.selected {
            self.remove(index);
        }
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(sel) => (sel + 1).min(self.items.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |sel| sel.saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(tasks: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for task in tasks {
            list.set_draft(task);
            assert!(list.add());
        }
        list
    }

    #[test]
    fn test_add_ignores_blank() {
        let mut list = TodoList::new();
        list.set_draft("   ");
        assert!(!list.add());
        assert!(list.items().is_empty());
        assert_eq!(list.draft, "   ");
    }

    #[test]
    fn test_add_clears_draft() {
        let list = list_with(&["milk"]);
        assert_eq!(list.draft, "");
        assert_eq!(
            list.items(),
            &[TodoItem {
                text: "milk".to_string(),
                done: false
            }]
        );
    }

    #[test]
    fn test_toggle_and_remove_by_index() {
        let mut list = list_with(&["a", "b", "c"]);
        list.toggle(1);
        assert!(list.items()[1].done);
        list.toggle(1);
        assert!(!list.items()[1].done);

        list.toggle(10);
        list.remove(10);
        assert_eq!(list.items().len(), 3);

        list.remove(0);
        let texts: Vec<_> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_selection_stays_valid() {
        let mut list = list_with(&["a", "b"]);
        assert_eq!(list.selected(), Some(1));
        list.remove_selected();
        assert_eq!(list.selected(), Some(0));
        list.remove_selected();
        assert_eq!(list.selected(), None);

        list.select_next();
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_selection_moves() {
        let mut list = list_with(&["a", "b", "c"]);
        list.select_prev();
        list.select_prev();
        list.select_prev();
        assert_eq!(list.selected(), Some(0));
        list.toggle_selected();
        assert!(list.items()[0].done);
        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));
    }
}
