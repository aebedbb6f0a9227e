//! Stateless routines over caller-owned slices.

use crate::Value;

/// Returns the index of `needle` in an ascending `haystack`.
///
/// Searches the half-open range `[low, high)`, so an empty slice is handled
/// without special cases. With duplicates, any matching index may be
/// returned.
///
/// ```
/// use cairn_collections::binary_search;
///
/// let sorted = [1, 2, 3, 5, 6, 8, 9];
/// assert_eq!(binary_search(&sorted, 8), Some(5));
/// assert_eq!(binary_search(&sorted, 11), None);
/// ```
pub fn binary_search(haystack: &[Value], needle: Value) -> Option<usize> {
    let mut low = 0;
    let mut high = haystack.len();

    while low < high {
        let middle = low + (high - low) / 2;
        let value = haystack[middle];

        if value == needle {
            return Some(middle);
        }
        if needle < value {
            high = middle;
        } else {
            low = middle + 1;
        }
    }

    None
}

/// Sorts `values` ascending in place. Stable.
///
/// Stops early once a pass makes no swap, so sorted input costs one pass.
///
/// ```
/// use cairn_collections::bubble_sort;
///
/// let mut values = [9, 3, 7, 4, 69, 420, 42];
/// bubble_sort(&mut values);
/// assert_eq!(values, [3, 4, 7, 9, 42, 69, 420]);
/// ```
pub fn bubble_sort(values: &mut [Value]) {
    let len = values.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [Value; 7] = [1, 2, 3, 5, 6, 8, 9];

    #[test]
    fn finds_every_present_value() {
        for (index, &value) in SORTED.iter().enumerate() {
            assert_eq!(binary_search(&SORTED, value), Some(index));
        }
    }

    #[test]
    fn reports_absent_values() {
        for needle in [0, 4, 7, 10, 11, Value::MIN, Value::MAX] {
            assert_eq!(binary_search(&SORTED, needle), None);
        }
        assert_eq!(binary_search(&[], 1), None);
    }

    #[test]
    fn sorts_reference_input() {
        let mut values = [9, 3, 7, 4, 69, 420, 42];
        bubble_sort(&mut values);
        assert_eq!(values, [3, 4, 7, 9, 42, 69, 420]);
    }

    #[test]
    fn sorts_edge_cases() {
        let mut empty: [Value; 0] = [];
        bubble_sort(&mut empty);

        let mut single = [1];
        bubble_sort(&mut single);
        assert_eq!(single, [1]);

        let mut reversed = [5, 4, 3, 2, 1, 0, -1];
        bubble_sort(&mut reversed);
        assert_eq!(reversed, [-1, 0, 1, 2, 3, 4, 5]);

        let mut duplicates = [2, 1, 2, 1];
        bubble_sort(&mut duplicates);
        assert_eq!(duplicates, [1, 1, 2, 2]);
    }
}
