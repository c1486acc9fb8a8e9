/// One entry of the tasks checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: u32,
    pub label: String,
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(id: u32, label: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            label: label.into(),
            done,
        }
    }
}

/// View-local checklist state; ids are unique within the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    /// Seed list a freshly mounted tasks view starts from
    pub fn seed() -> Self {
        Self::new(vec![
            ChecklistItem::new(1, "Implement Service Worker", true),
            ChecklistItem::new(2, "Create manifest.json", true),
            ChecklistItem::new(3, "Configure offline cache", false),
            ChecklistItem::new(4, "Test offline mode", false),
        ])
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Flip `done` on the item with `id`. Returns the new value, or `None`
    /// when no item matches (the list is left untouched).
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.done = !item.done;
        Some(item.done)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::seed()
    }
}
