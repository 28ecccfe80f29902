use chrono::NaiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItem {
    pub id: Uuid,
    pub name: String,
    pub editing: bool,
    pub crossed_out: bool,
    pub created: NaiveDateTime,
}

impl GroceryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            editing: false,
            crossed_out: false,
            created: chrono::Local::now().naive_local(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an empty item in edit mode and return its id.
    pub fn add(&mut self) -> Uuid {
        let mut item = GroceryItem::new("");
        item.editing = true;
        let id = item.id;
        self.items.push(item);
        id
    }

    pub fn rename(&mut self, id: Uuid, name: impl Into<String>) {
        if let Some(item) = self.get_mut(id) {
            item.name = name.into();
        }
    }

    pub fn finish_editing(&mut self, id: Uuid) {
        if let Some(item) = self.get_mut(id) {
            item.editing = false;
        }
    }

    pub fn toggle_crossed_out(&mut self, id: Uuid) {
        if let Some(item) = self.get_mut(id) {
            item.crossed_out = !item.crossed_out;
        }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|i| i.id != id);
    }

    /// Drop `id` if its name is blank. Returns true if it was dropped.
    pub fn prune_blank(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id || !i.is_blank());
        self.items.len() != before
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_starts_blank_in_edit_mode() {
        let mut list = GroceryList::new();
        let id = list.add();
        let item = &list.items()[0];
        assert_eq!(item.id, id);
        assert!(item.editing);
        assert!(item.is_blank());
    }

    #[test]
    fn rename_then_finish_editing() {
        let mut list = GroceryList::new();
        let id = list.add();
        list.rename(id, "Basil");
        list.finish_editing(id);
        assert_eq!(list.items()[0].name, "Basil");
        assert!(!list.items()[0].editing);
    }

    #[test]
    fn toggle_crosses_out_and_back() {
        let mut list = GroceryList::from_items(vec![GroceryItem::new("Milk")]);
        let id = list.items()[0].id;
        list.toggle_crossed_out(id);
        assert!(list.items()[0].crossed_out);
        list.toggle_crossed_out(id);
        assert!(!list.items()[0].crossed_out);
    }

    #[test]
    fn prune_only_drops_blank_items() {
        let mut list = GroceryList::new();
        let blank = list.add();
        let named = list.add();
        list.rename(blank, "   ");
        list.rename(named, "Eggs");
        assert!(!list.prune_blank(named));
        assert!(list.prune_blank(blank));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].name, "Eggs");
    }

    #[test]
    fn remove_unknown_id_is_harmless() {
        let mut list = GroceryList::from_items(vec![GroceryItem::new("Milk")]);
        list.remove(Uuid::new_v4());
        assert_eq!(list.items().len(), 1);
    }
}
