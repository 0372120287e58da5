mod entry;
mod list;
mod types;
mod view;

pub use entry::SelectionEntry;
pub use list::SelectionList;
pub use types::{ColumnLayout, ViewMessage};
pub use view::SelectionView;
