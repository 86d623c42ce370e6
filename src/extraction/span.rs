//! Balanced span scanning for brace-delimited blocks.
//!
//! Organism bodies nest META and GENE sub-blocks, so the closing brace of a
//! block is not the first `}` encountered. A depth-counting scan locates the
//! true closing brace without backtracking.

use std::ops::Range;

/// Locate the body span of a brace block opening at byte offset `open`.
///
/// Returns the byte range between the opening `{` and its matching `}`
/// (braces excluded), or `None` when `open` is not a `{` or the block never
/// closes.
pub fn balanced_span(text: &str, open: usize) -> Option<Range<usize>> {
    let mut chars = text[open..].char_indices();
    match chars.next() {
        Some((_, '{')) => {}
        _ => return None,
    }

    let mut depth = 1usize;
    for (idx, ch) in chars {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + 1..open + idx);
                }
            }
            _ => {}
        }
    }

    None
}
