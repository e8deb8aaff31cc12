//! Stateful rotating selector owning one section's selection state.

use advoca_model::Filter;

use super::{engine, filter};

/// Autoplay phase of a selector.
///
/// `Disabled` models the variants that never auto-advance. Once user
/// interaction moves `Autoplaying` to `Paused` there is no path back for the
/// lifetime of the selector; re-entering the section rebuilds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    Disabled,
    Autoplaying,
    Paused,
}

/// Index-based selection over an immutable item sequence, with optional
/// wraparound rotation, autoplay, and two filter dimensions.
///
/// The selector never stores items, only their filter labels; the owning
/// section keeps the content slice and resolves `current_index` against it.
/// All operations keep the cursor inside the current filtered view, and none
/// of them panic regardless of call order.
#[derive(Debug, Clone)]
pub struct RotatingSelector<C = (), K = ()>
where
    C: Copy + PartialEq,
    K: Copy + PartialEq,
{
    labels: Vec<(Option<C>, Option<K>)>,
    by_category: Filter<C>,
    by_kind: Filter<K>,
    // Indices into the item sequence, original order preserved.
    view: Vec<usize>,
    // Position within `view`; 0 when the view is empty.
    cursor: usize,
    autoplay: AutoplayState,
}

impl RotatingSelector {
    /// Manual carousel over `len` unlabeled items.
    pub fn carousel(len: usize) -> Self {
        Self::from_labels(vec![(None, None); len], AutoplayState::Disabled)
    }

    /// Rotator over `len` unlabeled items that auto-advances until the user
    /// intervenes.
    pub fn rotator(len: usize) -> Self {
        Self::from_labels(vec![(None, None); len], AutoplayState::Autoplaying)
    }
}

impl<C, K> RotatingSelector<C, K>
where
    C: Copy + PartialEq,
    K: Copy + PartialEq,
{
    /// Filterable selection over labeled items; both dimensions start at the
    /// `All` sentinel, so the initial view is the whole sequence.
    pub fn filtered(labels: Vec<(Option<C>, Option<K>)>) -> Self {
        Self::from_labels(labels, AutoplayState::Disabled)
    }

    fn from_labels(
        labels: Vec<(Option<C>, Option<K>)>,
        autoplay: AutoplayState,
    ) -> Self {
        let view = filter::apply_filters(&labels, Filter::All, Filter::All);
        Self {
            labels,
            by_category: Filter::All,
            by_kind: Filter::All,
            view,
            cursor: 0,
            autoplay,
        }
    }

    /// Number of items in the current filtered view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Whether the current filtered view holds no items.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Whether navigation controls should be enabled at all.
    pub fn has_multiple(&self) -> bool {
        self.view.len() > 1
    }

    /// Position of the displayed item within the filtered view.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the displayed item in the original sequence, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.view.get(self.cursor).copied()
    }

    /// Indices of the filtered view, in original relative order.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    pub fn autoplay(&self) -> AutoplayState {
        self.autoplay
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay == AutoplayState::Autoplaying
    }

    pub fn category_filter(&self) -> Filter<C> {
        self.by_category
    }

    pub fn kind_filter(&self) -> Filter<K> {
        self.by_kind
    }

    /// User-initiated step forward, wrapping past the end of the view.
    pub fn next(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.cursor = engine::advance(self.cursor, self.view.len());
        self.pause_autoplay();
    }

    /// User-initiated step backward, wrapping past the start of the view.
    pub fn previous(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.cursor = engine::retreat(self.cursor, self.view.len());
        self.pause_autoplay();
    }

    /// User-initiated jump to a position within the view.
    ///
    /// An out-of-range position is a silent no-op; in a UI context there is
    /// nothing useful to surface.
    pub fn select(&mut self, position: usize) {
        match engine::jump_to(position, self.view.len()) {
            Some(position) => {
                self.cursor = position;
                self.pause_autoplay();
            }
            None => log::debug!(
                "ignoring selection {position} outside view of length {}",
                self.view.len()
            ),
        }
    }

    /// Timer-driven step forward.
    ///
    /// Advances only while `Autoplaying` and never changes the autoplay
    /// state itself; only user actions pause the rotation.
    pub fn advance_auto(&mut self) {
        if self.autoplay != AutoplayState::Autoplaying || self.view.is_empty() {
            return;
        }
        self.cursor = engine::advance(self.cursor, self.view.len());
    }

    /// Replace the category dimension and re-derive the filtered view.
    pub fn set_category_filter(&mut self, by_category: Filter<C>) {
        if by_category != self.by_category {
            self.by_category = by_category;
            self.refresh_view();
        }
    }

    /// Replace the kind dimension and re-derive the filtered view.
    pub fn set_kind_filter(&mut self, by_kind: Filter<K>) {
        if by_kind != self.by_kind {
            self.by_kind = by_kind;
            self.refresh_view();
        }
    }

    // Recompute the view, keeping the displayed item when it survives the
    // filter change and resetting to the start of the view otherwise.
    fn refresh_view(&mut self) {
        let displayed = self.current_index();
        self.view =
            filter::apply_filters(&self.labels, self.by_category, self.by_kind);
        self.cursor = displayed
            .and_then(|index| self.view.iter().position(|&i| i == index))
            .unwrap_or(0);
    }

    fn pause_autoplay(&mut self) {
        if self.autoplay == AutoplayState::Autoplaying {
            self.autoplay = AutoplayState::Paused;
            log::debug!("autoplay paused by user interaction");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Topic {
        Health,
        Policy,
    }

    #[test]
    fn empty_sequence_admits_no_state_change() {
        let mut selector = RotatingSelector::carousel(0);
        selector.next();
        selector.previous();
        selector.select(0);
        selector.advance_auto();
        assert!(selector.is_empty());
        assert_eq!(selector.current_index(), None);
        assert_eq!(selector.cursor(), 0);
    }

    #[test]
    fn single_item_navigation_is_idempotent() {
        let mut selector = RotatingSelector::carousel(1);
        selector.next();
        assert_eq!(selector.current_index(), Some(0));
        selector.previous();
        assert_eq!(selector.current_index(), Some(0));
        assert!(!selector.has_multiple());
    }

    #[test]
    fn previous_from_start_wraps_to_last() {
        let mut selector = RotatingSelector::carousel(12);
        selector.previous();
        assert_eq!(selector.current_index(), Some(11));
    }

    #[test]
    fn select_out_of_range_is_a_no_op() {
        let mut selector = RotatingSelector::rotator(3);
        selector.select(3);
        assert_eq!(selector.current_index(), Some(0));
        // A rejected selection must not pause autoplay either.
        assert!(selector.is_autoplaying());
    }

    #[test]
    fn timer_ticks_advance_without_pausing() {
        let mut rotator = RotatingSelector::rotator(3);
        rotator.advance_auto();
        assert_eq!(rotator.current_index(), Some(1));
        rotator.advance_auto();
        assert_eq!(rotator.current_index(), Some(2));
        assert!(rotator.is_autoplaying());
    }

    #[test]
    fn manual_navigation_pauses_autoplay_permanently() {
        let mut rotator = RotatingSelector::rotator(3);
        rotator.next();
        assert_eq!(rotator.current_index(), Some(1));
        assert_eq!(rotator.autoplay(), AutoplayState::Paused);

        // The following tick must be inert.
        rotator.advance_auto();
        assert_eq!(rotator.current_index(), Some(1));
        assert_eq!(rotator.autoplay(), AutoplayState::Paused);
    }

    #[test]
    fn dot_selection_pauses_autoplay() {
        let mut rotator = RotatingSelector::rotator(3);
        rotator.select(2);
        assert_eq!(rotator.current_index(), Some(2));
        assert_eq!(rotator.autoplay(), AutoplayState::Paused);
    }

    #[test]
    fn carousel_variant_never_autoplays() {
        let mut carousel = RotatingSelector::carousel(4);
        assert_eq!(carousel.autoplay(), AutoplayState::Disabled);
        carousel.advance_auto();
        assert_eq!(carousel.current_index(), Some(0));
        carousel.next();
        assert_eq!(carousel.autoplay(), AutoplayState::Disabled);
    }

    fn topic_labels() -> Vec<(Option<Topic>, Option<()>)> {
        vec![
            (Some(Topic::Health), None),
            (Some(Topic::Policy), None),
            (Some(Topic::Health), None),
            (Some(Topic::Policy), None),
            (Some(Topic::Policy), None),
        ]
    }

    #[test]
    fn filter_narrows_view_in_original_order_and_resets_cursor() {
        let mut selector = RotatingSelector::filtered(topic_labels());
        selector.select(4);
        assert_eq!(selector.current_index(), Some(4));

        selector.set_category_filter(Filter::Only(Topic::Health));
        assert_eq!(selector.view(), &[0, 2]);
        // Item 4 no longer matches, so the cursor resets to the view start.
        assert_eq!(selector.cursor(), 0);
        assert_eq!(selector.current_index(), Some(0));
    }

    #[test]
    fn filter_change_keeps_the_displayed_item_when_it_survives() {
        let mut selector = RotatingSelector::filtered(topic_labels());
        selector.select(2);

        selector.set_category_filter(Filter::Only(Topic::Health));
        assert_eq!(selector.current_index(), Some(2));
        assert_eq!(selector.cursor(), 1);
    }

    #[test]
    fn filter_yielding_empty_view_is_a_valid_state() {
        let unlabeled: Vec<(Option<Topic>, Option<()>)> = vec![(None, None); 3];
        let mut selector = RotatingSelector::filtered(unlabeled);
        selector.set_category_filter(Filter::Only(Topic::Health));
        assert!(selector.is_empty());
        assert_eq!(selector.current_index(), None);

        // Navigation over the empty view stays inert.
        selector.next();
        assert_eq!(selector.current_index(), None);

        // Widening back to All restores the full view from the start.
        selector.set_category_filter(Filter::All);
        assert_eq!(selector.view(), &[0, 1, 2]);
        assert_eq!(selector.current_index(), Some(0));
    }

    #[test]
    fn rotation_wraps_within_the_filtered_view() {
        let mut selector = RotatingSelector::filtered(topic_labels());
        selector.set_category_filter(Filter::Only(Topic::Policy));
        assert_eq!(selector.view(), &[1, 3, 4]);

        selector.next();
        selector.next();
        assert_eq!(selector.current_index(), Some(4));
        selector.next();
        assert_eq!(selector.current_index(), Some(1));
    }
}
