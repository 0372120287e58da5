use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use crate::backend::SelectionPool;
use crate::frontend::entry::SelectionEntry;
use crate::frontend::types::{ColumnLayout, ViewMessage};
use crate::frontend::view::SelectionView;

/// Controller for the selections view. It owns no selection data of its own;
/// every refresh cycle re-reads the pool and hands the surface a fresh set of
/// rows.
pub struct SelectionList<V: SelectionView> {
    pool: Rc<RefCell<SelectionPool>>,
    view: V,
    sender: mpsc::Sender<ViewMessage>,
    columns: ColumnLayout,
}

impl<V: SelectionView> SelectionList<V> {
    pub fn new(pool: Rc<RefCell<SelectionPool>>, view: V, sender: mpsc::Sender<ViewMessage>) -> Self {
        Self {
            pool,
            view,
            sender,
            columns: ColumnLayout::default(),
        }
    }

    /// Repopulate the surface from current pool state. Every selection is
    /// forwarded; this view never excludes one. The surface sees
    /// `refresh_start`, one `refresh_match` per selection in pool order, then
    /// `refresh_finished`, in that order, before this call returns.
    pub fn refresh(&mut self) {
        self.view.refresh_start();

        // Row handling may read the pool again, so the borrow must end
        // before the surface runs.
        let ids = self.pool.borrow().ids();
        for id in ids {
            let entry = SelectionEntry::new(
                Rc::clone(&self.pool),
                id,
                self.columns,
                self.sender.clone(),
            );
            self.view.refresh_match(entry);
        }

        self.view.refresh_finished();
    }

    /// Same as `refresh()`, skipped entirely while the surface is hidden.
    pub fn refresh_if_visible(&mut self) {
        if self.view.visible() {
            self.refresh();
        }
    }

    pub fn current_selection(&self) -> Option<SelectionEntry> {
        self.view.active_entry()
    }

    /// Tell dependent views that package state derived from selections needs
    /// to be recomputed.
    pub fn notify_packages_changed(&self) {
        let _ = self.sender.send(ViewMessage::PackagesChanged);
    }

    pub fn status_col(&self) -> usize {
        self.columns.status
    }

    pub fn summary_col(&self) -> usize {
        self.columns.summary
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::types::{SelectionInfo, UiStatus};

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Lifecycle {
        Start,
        Match,
        Finished,
    }

    struct RecordingView {
        events: Vec<Lifecycle>,
        rows: Vec<SelectionEntry>,
        visible: bool,
        active: Option<usize>,
    }

    impl RecordingView {
        fn new(visible: bool) -> Self {
            Self {
                events: Vec::new(),
                rows: Vec::new(),
                visible,
                active: None,
            }
        }
    }

    impl SelectionView for RecordingView {
        fn refresh_start(&mut self) {
            self.rows.clear();
            self.events.push(Lifecycle::Start);
        }

        fn refresh_match(&mut self, entry: SelectionEntry) {
            self.rows.push(entry);
            self.events.push(Lifecycle::Match);
        }

        fn refresh_finished(&mut self) {
            self.events.push(Lifecycle::Finished);
        }

        fn visible(&self) -> bool {
            self.visible
        }

        fn active_entry(&self) -> Option<SelectionEntry> {
            self.active.and_then(|index| self.rows.get(index)).cloned()
        }
    }

    fn pool_with(orders: &[(&str, i64)]) -> Rc<RefCell<SelectionPool>> {
        let mut pool = SelectionPool::new();
        for (name, order) in orders {
            pool.insert(SelectionInfo {
                name: name.to_string(),
                summary: format!("{} selection", name),
                order: *order,
                packages: vec![format!("{}-pkg", name)],
            });
        }
        Rc::new(RefCell::new(pool))
    }

    fn list_with(
        orders: &[(&str, i64)],
        visible: bool,
    ) -> (
        SelectionList<RecordingView>,
        mpsc::Receiver<ViewMessage>,
    ) {
        let (sender, receiver) = mpsc::channel();
        let list = SelectionList::new(pool_with(orders), RecordingView::new(visible), sender);
        (list, receiver)
    }

    #[test]
    fn refresh_emits_one_match_per_selection_between_brackets() {
        let (mut list, _receiver) = list_with(&[("base", 10), ("desktop", 20), ("games", 30)], true);
        list.refresh();

        assert_eq!(
            list.view().events,
            vec![
                Lifecycle::Start,
                Lifecycle::Match,
                Lifecycle::Match,
                Lifecycle::Match,
                Lifecycle::Finished,
            ]
        );
        assert_eq!(list.view().rows.len(), 3);
    }

    #[test]
    fn refresh_replaces_rows_instead_of_appending() {
        let (mut list, _receiver) = list_with(&[("base", 10), ("desktop", 20)], true);
        list.refresh();
        list.refresh();
        assert_eq!(list.view().rows.len(), 2);
    }

    #[test]
    fn refresh_forwards_rows_in_pool_order() {
        let (mut list, _receiver) = list_with(&[("desktop", 20), ("base", 10)], true);
        list.refresh();

        let names: Vec<String> = list.view().rows.iter().map(|row| row.name()).collect();
        assert_eq!(names, vec!["desktop".to_string(), "base".to_string()]);
    }

    #[test]
    fn refresh_if_visible_is_a_no_op_while_hidden() {
        let (mut list, _receiver) = list_with(&[("base", 10)], false);
        list.refresh_if_visible();
        assert!(list.view().events.is_empty());
        assert!(list.view().rows.is_empty());

        list.view_mut().visible = true;
        list.refresh_if_visible();
        assert_eq!(
            list.view().events,
            vec![Lifecycle::Start, Lifecycle::Match, Lifecycle::Finished]
        );
    }

    #[test]
    fn compare_ignores_requested_column_and_direction() {
        let (mut list, _receiver) =
            list_with(&[("games", 30), ("base", 10), ("desktop", 20)], true);
        list.refresh();

        for column in 0..3 {
            for ascending in [true, false] {
                let mut rows = list.view().rows.clone();
                rows.sort_by(|a, b| a.compare(b, column, ascending));
                let names: Vec<String> = rows.iter().map(|row| row.name()).collect();
                assert_eq!(
                    names,
                    vec![
                        "base".to_string(),
                        "desktop".to_string(),
                        "games".to_string()
                    ]
                );
            }
        }
    }

    #[test]
    fn compare_sign_matches_order_key_difference() {
        let (mut list, _receiver) = list_with(&[("base", 10), ("desktop", 20)], true);
        list.refresh();

        let base = &list.view().rows[0];
        let desktop = &list.view().rows[1];
        assert_eq!(base.compare(desktop, 1, true), Ordering::Less);
        assert_eq!(desktop.compare(base, 0, false), Ordering::Greater);
    }

    #[test]
    fn compare_is_reflexive() {
        let (mut list, _receiver) = list_with(&[("base", 10)], true);
        list.refresh();

        let row = &list.view().rows[0];
        assert_eq!(row.compare(row, 1, true), Ordering::Equal);
        assert_eq!(row.compare(row, 0, false), Ordering::Equal);
    }

    #[test]
    fn set_status_writes_through_for_every_status() {
        let (mut list, _receiver) = list_with(&[("base", 10)], true);
        list.refresh();

        let row = list.view().rows[0].clone();
        for status in UiStatus::all() {
            row.set_status(status);
            assert_eq!(row.status(), status);
        }
    }

    #[test]
    fn set_status_sends_one_packages_changed_and_cascades() {
        let (mut list, receiver) = list_with(&[("base", 10)], true);
        list.refresh();

        let row = list.view().rows[0].clone();
        assert_eq!(row.status(), UiStatus::NoInstall);
        row.set_status(UiStatus::Install);

        assert_eq!(receiver.try_iter().count(), 1);
        assert_eq!(row.status(), UiStatus::Install);
        assert_eq!(
            list.pool.borrow().package_state("base-pkg"),
            Some(UiStatus::AutoInstall)
        );
    }

    #[test]
    fn notify_packages_changed_forwards_on_the_channel() {
        let (list, receiver) = list_with(&[("base", 10)], true);
        list.notify_packages_changed();
        assert_eq!(receiver.try_recv(), Ok(ViewMessage::PackagesChanged));
    }

    #[test]
    fn current_selection_is_none_without_an_active_row() {
        let (mut list, _receiver) = list_with(&[("base", 10)], true);
        assert!(list.current_selection().is_none());

        list.refresh();
        assert!(list.current_selection().is_none());
    }

    #[test]
    fn current_selection_tracks_the_active_row() {
        let (mut list, _receiver) = list_with(&[("base", 10), ("desktop", 20)], true);
        list.refresh();

        list.view_mut().active = Some(1);
        let current = list.current_selection().unwrap();
        assert_eq!(current.name(), "desktop");
    }

    #[test]
    fn entries_resolve_shared_column_layout() {
        let (mut list, _receiver) = list_with(&[("base", 10)], true);
        list.refresh();

        let row = &list.view().rows[0];
        assert_eq!(row.status_col(), list.status_col());
        assert_eq!(row.summary_col(), list.summary_col());
        assert_eq!(row.cell_text(list.status_col()), "Do not install");
        assert_eq!(row.cell_text(list.summary_col()), "base selection");
        assert_eq!(row.cell_text(7), "");
    }
}
