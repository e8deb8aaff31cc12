//! Pure filter-predicate evaluation over labeled item sequences.

use advoca_model::Filter;

/// Whether an item with the given labels passes both filter dimensions.
///
/// Dimensions compose with logical AND: the item must satisfy the category
/// dimension and the kind dimension.
pub fn matches_filter<C, K>(
    category: Option<C>,
    kind: Option<K>,
    by_category: Filter<C>,
    by_kind: Filter<K>,
) -> bool
where
    C: Copy + PartialEq,
    K: Copy + PartialEq,
{
    by_category.matches(category) && by_kind.matches(kind)
}

/// Indices of the items whose labels pass both dimensions, preserving the
/// original relative order.
///
/// Pure and deterministic: recomputing from the same inputs yields the same
/// view, so callers may re-derive it at any time.
pub fn apply_filters<C, K>(
    labels: &[(Option<C>, Option<K>)],
    by_category: Filter<C>,
    by_kind: Filter<K>,
) -> Vec<usize>
where
    C: Copy + PartialEq,
    K: Copy + PartialEq,
{
    labels
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, (category, kind))| {
            matches_filter(category, kind, by_category, by_kind)
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Topic {
        Health,
        Policy,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Format {
        Pdf,
        Video,
    }

    fn labels() -> Vec<(Option<Topic>, Option<Format>)> {
        vec![
            (Some(Topic::Health), Some(Format::Pdf)),
            (Some(Topic::Policy), Some(Format::Pdf)),
            (Some(Topic::Health), Some(Format::Video)),
            (Some(Topic::Policy), Some(Format::Video)),
            (Some(Topic::Health), Some(Format::Pdf)),
        ]
    }

    #[test]
    fn all_all_passes_every_item() {
        let view = apply_filters(&labels(), Filter::All, Filter::All);
        assert_eq!(view, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn single_dimension_preserves_relative_order() {
        let view =
            apply_filters(&labels(), Filter::Only(Topic::Health), Filter::All);
        assert_eq!(view, vec![0, 2, 4]);
    }

    #[test]
    fn dimensions_compose_with_and() {
        let view = apply_filters(
            &labels(),
            Filter::Only(Topic::Health),
            Filter::Only(Format::Pdf),
        );
        assert_eq!(view, vec![0, 4]);
    }

    #[test]
    fn reapplication_is_deterministic() {
        let first =
            apply_filters(&labels(), Filter::Only(Topic::Policy), Filter::All);
        let second =
            apply_filters(&labels(), Filter::Only(Topic::Policy), Filter::All);
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let unlabeled: Vec<(Option<Topic>, Option<Format>)> =
            vec![(None, None); 3];
        let view =
            apply_filters(&unlabeled, Filter::Only(Topic::Health), Filter::All);
        assert!(view.is_empty());
    }
}
