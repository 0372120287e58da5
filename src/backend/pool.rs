use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::{SelectionId, SelectionInfo, UiStatus};

#[derive(Clone, Debug)]
struct PoolSlot {
    info: SelectionInfo,
    status: UiStatus,
}

/// In-memory facade over the package backend's selection collection.
/// Slot order is the backend's declared order of iteration; it never changes
/// after insertion, so `SelectionId` handles stay stable for the lifetime of
/// the pool.
#[derive(Clone, Debug, Default)]
pub struct SelectionPool {
    slots: Vec<PoolSlot>,
    package_states: HashMap<String, UiStatus>,
    pub generated_at: Option<DateTime<Utc>>,
}

impl SelectionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, info: SelectionInfo) -> SelectionId {
        let id = SelectionId(self.slots.len());
        self.slots.push(PoolSlot {
            info,
            status: UiStatus::NoInstall,
        });
        id
    }

    pub fn ids(&self) -> Vec<SelectionId> {
        (0..self.slots.len()).map(SelectionId).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn info(&self, id: SelectionId) -> Option<&SelectionInfo> {
        self.slots.get(id.0).map(|slot| &slot.info)
    }

    pub fn order(&self, id: SelectionId) -> Option<i64> {
        self.slots.get(id.0).map(|slot| slot.info.order)
    }

    pub fn status(&self, id: SelectionId) -> Option<UiStatus> {
        self.slots.get(id.0).map(|slot| slot.status)
    }

    pub fn set_status(&mut self, id: SelectionId, status: UiStatus) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.status = status;
        }
    }

    /// Apply the consequences of `status` to the selection's member packages.
    /// Install- and update-class statuses mark members as automatic changes;
    /// delete-class statuses mark them for automatic removal; the remaining
    /// statuses clear any derived member state.
    pub fn activate_changes(&mut self, id: SelectionId, status: UiStatus) {
        let Some(slot) = self.slots.get(id.0) else {
            return;
        };

        let derived = match status {
            UiStatus::Install | UiStatus::AutoInstall => Some(UiStatus::AutoInstall),
            UiStatus::Update | UiStatus::AutoUpdate => Some(UiStatus::AutoUpdate),
            UiStatus::Del | UiStatus::AutoDel => Some(UiStatus::AutoDel),
            UiStatus::NoInstall | UiStatus::KeepInstalled | UiStatus::Taboo => None,
        };

        let packages = slot.info.packages.clone();
        for package in packages {
            match derived {
                Some(state) => {
                    self.package_states.insert(package, state);
                }
                None => {
                    self.package_states.remove(&package);
                }
            }
        }
    }

    pub fn package_state(&self, package: &str) -> Option<UiStatus> {
        self.package_states.get(package).copied()
    }

    pub fn package_states(&self) -> &HashMap<String, UiStatus> {
        &self.package_states
    }

    pub fn find(&self, name: &str) -> Option<SelectionId> {
        self.slots
            .iter()
            .position(|slot| slot.info.name == name)
            .map(SelectionId)
    }
}
