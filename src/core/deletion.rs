use super::assignment::DayAssignmentStore;
use super::day_grid::DayKey;

/// Yes/no gate in front of removing a day's recipe.
///
/// Holds at most one pending day. Both `confirm` and `cancel` close the
/// gate, so nothing lingers between openings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionConfirm {
    pending: Option<DayKey>,
}

impl DeletionConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to delete `key`'s recipe. Ignored (returns false) while already open.
    pub fn open(&mut self, key: DayKey) -> bool {
        if let Some(current) = self.pending {
            log::debug!("deletion: {key} ignored, {current} still pending");
            return false;
        }
        self.pending = Some(key);
        true
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<DayKey> {
        self.pending
    }

    /// Remove the pending day's recipe from `store` and close.
    pub fn confirm<S: DayAssignmentStore + ?Sized>(&mut self, store: &mut S) -> Option<DayKey> {
        let key = self.pending.take()?;
        log::info!("Removing recipe assigned to {key}");
        store.remove(key);
        Some(key)
    }

    /// Close without touching the store.
    pub fn cancel(&mut self) -> Option<DayKey> {
        self.pending.take()
    }
}
