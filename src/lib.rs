pub mod backend;
pub mod frontend;
pub mod helpers;
pub mod settings;
pub mod types;

pub use backend::{
    SelectionPool, load_selection_snapshot_from_disk, save_selection_snapshot_to_disk,
};
pub use frontend::{ColumnLayout, SelectionEntry, SelectionList, SelectionView, ViewMessage};
pub use settings::{FrontendSettings, load_frontend_settings, save_frontend_settings};
pub use types::{SelectionId, SelectionInfo, UiStatus};
