//! Buffer scanning helpers: windowed pattern search and masked comparison.

/// Find the lowest index in `[start, window_end)` at which `pattern` occurs
/// contiguously in `haystack`.
///
/// Returns `None` when the remaining window is shorter than the pattern or
/// no occurrence exists. `window_end` past the end of `haystack` is clamped
/// to its length. An empty pattern matches at `start`.
///
/// Naive first-byte scan with full verification, resuming one past each
/// failed candidate so overlapping candidates are never skipped. Worst case
/// `O(n * m)`.
pub fn find_pattern(
    haystack: &[u8],
    pattern: &[u8],
    start: usize,
    window_end: usize,
) -> Option<usize> {
    let end = window_end.min(haystack.len());
    if start > end || end - start < pattern.len() {
        return None;
    }
    if pattern.is_empty() {
        return Some(start);
    }
    let first = pattern[0];
    let mut pos = start;
    while pos + pattern.len() <= end {
        let candidate = pos + haystack[pos..end].iter().position(|&b| b == first)?;
        if candidate + pattern.len() > end {
            return None;
        }
        if &haystack[candidate..candidate + pattern.len()] == pattern {
            return Some(candidate);
        }
        pos = candidate + 1;
    }
    None
}

/// Masked subset comparison between two optional byte sequences.
///
/// `None` equals `None`; `None` never equals `Some`. Otherwise the lengths
/// must match and at every position each bit set in `a` must also be set in
/// `b` (`(b[i] & a[i]) == a[i]`).
///
/// Note the asymmetry: `a` is a required-bits mask, not an equality operand,
/// so swapping the arguments can change the result. Callers wanting strict
/// equality should compare the slices directly.
pub fn bitmask_equals(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(mask), Some(data)) => {
            mask.len() == data.len()
                && mask.iter().zip(data).all(|(&m, &d)| (d & m) == m)
        }
    }
}
