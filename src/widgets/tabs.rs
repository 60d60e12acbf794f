use crate::config::TabDef;

/// Tab strip with exactly one active tab
#[derive(Debug, Clone)]
pub struct TabsState {
    tabs: Vec<TabDef>,
    active: usize,
}

impl TabsState {
    pub fn new(tabs: Vec<TabDef>) -> Self {
        Self { tabs, active: 0 }
    }

    pub fn tabs(&self) -> &[TabDef] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&TabDef> {
        self.tabs.get(self.active)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    pub fn next(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        }
    }
}
