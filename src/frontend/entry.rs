use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::mpsc;

use crate::backend::SelectionPool;
use crate::frontend::types::{ColumnLayout, ViewMessage};
use crate::types::{SelectionId, UiStatus};

/// One display row bound to one backend selection. The entry holds nothing
/// but its handle; name, summary, order, and status are resolved against the
/// pool on every access.
#[derive(Clone)]
pub struct SelectionEntry {
    pool: Rc<RefCell<SelectionPool>>,
    id: SelectionId,
    columns: ColumnLayout,
    sender: mpsc::Sender<ViewMessage>,
}

impl SelectionEntry {
    pub(crate) fn new(
        pool: Rc<RefCell<SelectionPool>>,
        id: SelectionId,
        columns: ColumnLayout,
        sender: mpsc::Sender<ViewMessage>,
    ) -> Self {
        Self {
            pool,
            id,
            columns,
            sender,
        }
    }

    pub fn id(&self) -> SelectionId {
        self.id
    }

    pub fn name(&self) -> String {
        self.pool
            .borrow()
            .info(self.id)
            .map(|info| info.name.clone())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> String {
        self.pool
            .borrow()
            .info(self.id)
            .map(|info| info.summary.clone())
            .unwrap_or_default()
    }

    pub fn package_count(&self) -> usize {
        self.pool
            .borrow()
            .info(self.id)
            .map(|info| info.packages.len())
            .unwrap_or(0)
    }

    pub fn status(&self) -> UiStatus {
        self.pool.borrow().status(self.id).unwrap_or_default()
    }

    /// Write `new_status` through to the backend, apply its activate-changes
    /// cascade, and tell dependent views to recompute package state.
    pub fn set_status(&self, new_status: UiStatus) {
        {
            let mut pool = self.pool.borrow_mut();
            pool.set_status(self.id, new_status);
            pool.activate_changes(self.id, new_status);
        }
        let _ = self.sender.send(ViewMessage::PackagesChanged);
    }

    /// Three-way row comparison. Selections keep their backend-declared
    /// order in every column and sort direction, so both arguments are
    /// accepted only for sortable-row interface conformity and ignored.
    pub fn compare(&self, other: &SelectionEntry, _column: usize, _ascending: bool) -> Ordering {
        let mine = self.pool.borrow().order(self.id).unwrap_or(i64::MAX);
        let theirs = other.pool.borrow().order(other.id).unwrap_or(i64::MAX);
        mine.cmp(&theirs)
    }

    pub fn status_col(&self) -> usize {
        self.columns.status
    }

    pub fn summary_col(&self) -> usize {
        self.columns.summary
    }

    pub fn cell_text(&self, column: usize) -> String {
        if column == self.columns.status {
            self.status().label().to_string()
        } else if column == self.columns.summary {
            self.summary()
        } else {
            String::new()
        }
    }
}
