mod pool;
mod snapshot;

pub use pool::SelectionPool;
pub use snapshot::{load_selection_snapshot_from_disk, save_selection_snapshot_to_disk};
