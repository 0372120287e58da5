/// Column indices shared between a selection list and its entries. The
/// controller owns the layout; entries copy it at construction so a row can
/// answer column queries without reaching back into the list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnLayout {
    pub status: usize,
    pub summary: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            status: 0,
            summary: 1,
        }
    }
}

/// Notifications forwarded to views that derive their display from selection
/// state. Delivered over the frontend's message channel; receivers recompute
/// rather than patching incrementally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewMessage {
    PackagesChanged,
}
