//! Pure index arithmetic over a sequence of known length.
//!
//! All functions here are side-effect free. `advance` and `retreat` are
//! defined only for non-empty sequences; the selector guards the empty case
//! before calling them.

/// Next index with wraparound: `(index + 1) % len`.
///
/// Callers must ensure `len > 0`.
pub fn advance(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "advance requires a non-empty sequence");
    (index + 1) % len
}

/// Previous index with wraparound: `(index + len - 1) % len`.
///
/// Callers must ensure `len > 0`.
pub fn retreat(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "retreat requires a non-empty sequence");
    (index + len - 1) % len
}

/// Validated jump to an absolute position.
///
/// Returns `None` when `target` lies outside `0..len`; the caller treats
/// that as a no-op rather than an error.
pub fn jump_to(target: usize, len: usize) -> Option<usize> {
    (target < len).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_end() {
        assert_eq!(advance(0, 3), 1);
        assert_eq!(advance(2, 3), 0);
    }

    #[test]
    fn retreat_wraps_at_start() {
        assert_eq!(retreat(1, 3), 0);
        assert_eq!(retreat(0, 3), 2);
        assert_eq!(retreat(0, 12), 11);
    }

    #[test]
    fn full_cycle_returns_to_origin() {
        for len in 1..=12 {
            for start in 0..len {
                let mut index = start;
                for _ in 0..len {
                    index = advance(index, len);
                }
                assert_eq!(index, start, "cycle of length {len} from {start}");
            }
        }
    }

    #[test]
    fn advance_then_retreat_round_trips() {
        for len in 1..=7 {
            for start in 0..len {
                assert_eq!(retreat(advance(start, len), len), start);
                assert_eq!(advance(retreat(start, len), len), start);
            }
        }
    }

    #[test]
    fn single_item_is_a_self_loop() {
        assert_eq!(advance(0, 1), 0);
        assert_eq!(retreat(0, 1), 0);
    }

    #[test]
    fn jump_to_rejects_out_of_range_targets() {
        assert_eq!(jump_to(0, 3), Some(0));
        assert_eq!(jump_to(2, 3), Some(2));
        assert_eq!(jump_to(3, 3), None);
        assert_eq!(jump_to(0, 0), None);
    }
}
