/// Opaque handle to one selection inside a `SelectionPool`. Handles are only
/// meaningful against the pool that issued them and are re-derived on every
/// refresh cycle, never stored across one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SelectionId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct SelectionInfo {
    pub name: String,
    pub summary: String,
    pub order: i64,
    pub packages: Vec<String>,
}

/// Installability state of a selection or package as shown in the UI.
/// The `Auto*` variants mark states derived from another change rather than
/// requested directly by the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UiStatus {
    NoInstall,
    Install,
    Update,
    Del,
    Taboo,
    AutoInstall,
    AutoUpdate,
    AutoDel,
    KeepInstalled,
}

impl Default for UiStatus {
    fn default() -> Self {
        UiStatus::NoInstall
    }
}

impl UiStatus {
    pub fn label(self) -> &'static str {
        match self {
            UiStatus::NoInstall => "Do not install",
            UiStatus::Install => "Install",
            UiStatus::Update => "Update",
            UiStatus::Del => "Delete",
            UiStatus::Taboo => "Taboo",
            UiStatus::AutoInstall => "Install (automatic)",
            UiStatus::AutoUpdate => "Update (automatic)",
            UiStatus::AutoDel => "Delete (automatic)",
            UiStatus::KeepInstalled => "Keep",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            UiStatus::NoInstall => "no_install",
            UiStatus::Install => "install",
            UiStatus::Update => "update",
            UiStatus::Del => "del",
            UiStatus::Taboo => "taboo",
            UiStatus::AutoInstall => "auto_install",
            UiStatus::AutoUpdate => "auto_update",
            UiStatus::AutoDel => "auto_del",
            UiStatus::KeepInstalled => "keep_installed",
        }
    }

    pub fn from_key(value: &str) -> Option<UiStatus> {
        match value {
            "no_install" => Some(UiStatus::NoInstall),
            "install" => Some(UiStatus::Install),
            "update" => Some(UiStatus::Update),
            "del" => Some(UiStatus::Del),
            "taboo" => Some(UiStatus::Taboo),
            "auto_install" => Some(UiStatus::AutoInstall),
            "auto_update" => Some(UiStatus::AutoUpdate),
            "auto_del" => Some(UiStatus::AutoDel),
            "keep_installed" => Some(UiStatus::KeepInstalled),
            _ => None,
        }
    }

    pub fn all() -> [UiStatus; 9] {
        [
            UiStatus::NoInstall,
            UiStatus::Install,
            UiStatus::Update,
            UiStatus::Del,
            UiStatus::Taboo,
            UiStatus::AutoInstall,
            UiStatus::AutoUpdate,
            UiStatus::AutoDel,
            UiStatus::KeepInstalled,
        ]
    }
}
