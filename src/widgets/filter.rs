//! Case-insensitive search over a fixed list.

/// Entry in a filterable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    /// Text matched against the query
    pub label: String,
    /// Extra text shown after the label, not searched
    pub detail: Option<String>,
}

impl FilterItem {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            detail: None,
        }
    }

    pub fn with_detail(label: &str, detail: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn display(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} ({})", self.label, detail),
            None => self.label.clone(),
        }
    }
}

/// Search filter state (rendering-agnostic)
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub title: String,
    pub query: String,
    items: Vec<FilterItem>,
}

impl SearchFilter {
    pub fn new(title: &str, items: Vec<FilterItem>) -> Self {
        Self {
            title: title.to_string(),
            query: String::new(),
            items,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Items whose label contains the query, ignoring case, in original order
    pub fn filtered(&self) -> Vec<&FilterItem> {
        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.label.to_lowercase().contains(&needle))
            .collect()
    }
}
