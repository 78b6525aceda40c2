use crate::core::data::selection_rect::SelectionRect;
use std::sync::{Mutex, PoisonError};

/// The live drag rectangle shared between input handling and presentation.
#[derive(Debug, Default)]
pub struct SelectionCell {
    selection: Mutex<Option<SelectionRect>>,
}

impl SelectionCell {
    pub fn set(&self, selection: SelectionRect) {
        *self.lock() = Some(selection);
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    #[must_use]
    pub fn get(&self) -> Option<SelectionRect> {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SelectionRect>> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
