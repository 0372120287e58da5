use crate::frontend::entry::SelectionEntry;

/// Contract between the selection list and whatever renders it. A refresh
/// cycle arrives as `refresh_start`, one `refresh_match` per selection, then
/// `refresh_finished`, all delivered synchronously on the caller's thread.
pub trait SelectionView {
    /// A refresh cycle is starting. Discard every existing row; the cycle
    /// replaces the full row set rather than diffing it.
    fn refresh_start(&mut self);

    /// One selection matched during the current cycle. Append a row for it.
    fn refresh_match(&mut self, entry: SelectionEntry);

    /// The current refresh cycle is complete.
    fn refresh_finished(&mut self);

    /// Whether the surface is currently shown to the user.
    fn visible(&self) -> bool;

    /// The entry behind the row the user has marked active, if any.
    fn active_entry(&self) -> Option<SelectionEntry>;
}
