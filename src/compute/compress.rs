//! Geohash set compression.
//!
//! A cover produced at a fine precision usually contains whole blocks of
//! sibling cells. Compression replaces every complete group of 32 siblings
//! with their parent, level by level, from the longest code length down to a
//! minimum precision. Parents produced at one level take part in the next,
//! coarser, level.
//!
//! Codes that cannot be merged are emitted as-is, or truncated to a cutoff
//! precision when they are longer than it. Truncation can make several codes
//! collapse into one; the output is deduplicated.
//!
//! ## Level walk
//!
//! ```text
//! level L+1 working set ──group by L-prefix──┬─ 32 children ─► parent joins level L
//!                                             └─ < 32        ─► emitted (truncated)
//! codes longer than L+1 ─────────────────────────────────────► emitted (truncated)
//! ```
//!
//! The walk stops early once fewer than 32 codes remain, since no further
//! group can be complete.

use super::codec::SIBLING_COUNT;
use super::validation::validate_precision;
use crate::error::Result;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Merge complete sibling groups in `codes` into coarser cells.
///
/// * `min_precision` - the shortest code merging may produce (1-12)
/// * `cutoff_precision` - the longest code emitted (1-12); longer unmerged
///   codes are truncated to it
///
/// The result is deduplicated and sorted. Two inputs are returned untouched:
/// an empty list, and a list whose longest code is not longer than
/// `min_precision`.
///
/// # Errors
///
/// Returns [`ProxhashError::InvalidArgument`](crate::ProxhashError) when either
/// precision is outside [1, 12]. Nothing is computed in that case.
///
/// # Examples
///
/// ```
/// use proxhash::compute::compress::compress;
/// use proxhash::compute::expand::expand;
///
/// let mut codes = expand("tdnu2");
/// codes.push("wx4g1xwc".to_string());
///
/// let compressed = compress(&codes, 3, 7)?;
/// assert_eq!(compressed, vec!["tdnu2", "wx4g1xw"]);
/// # Ok::<(), proxhash::ProxhashError>(())
/// ```
pub fn compress<S: AsRef<str>>(
    codes: &[S],
    min_precision: usize,
    cutoff_precision: usize,
) -> Result<Vec<String>> {
    validate_precision("min precision", min_precision)?;
    validate_precision("cutoff precision", cutoff_precision)?;

    if codes.is_empty() {
        return Ok(Vec::new());
    }

    let max_len = codes
        .iter()
        .map(|c| code_len(c.as_ref()))
        .max()
        .unwrap_or_default();

    if max_len <= min_precision {
        return Ok(codes.iter().map(|c| c.as_ref().to_owned()).collect());
    }

    let cutoff = cutoff_precision.min(max_len);

    let mut working: FxHashSet<String> = codes.iter().map(|c| c.as_ref().to_owned()).collect();
    let mut results = BTreeSet::new();

    let mut target_len = max_len - 1;
    while target_len >= min_precision && working.len() >= SIBLING_COUNT {
        working = merge_level(working, target_len, cutoff, &mut results);
        target_len -= 1;
    }

    for code in &working {
        results.insert(truncate(code, cutoff).to_owned());
    }

    log::debug!(
        "Compressed {} codes into {} (min precision {}, cutoff {})",
        codes.len(),
        results.len(),
        min_precision,
        cutoff
    );

    Ok(results.into_iter().collect())
}

/// Run one merge pass producing codes of `target_len`.
///
/// Consumes the working set and returns the next one; everything that is
/// settled at this level goes into `results`.
fn merge_level(
    working: FxHashSet<String>,
    target_len: usize,
    cutoff: usize,
    results: &mut BTreeSet<String>,
) -> FxHashSet<String> {
    let candidate_len = target_len + 1;

    let mut next = FxHashSet::default();
    let mut groups: FxHashMap<String, Vec<String>> = FxHashMap::default();

    for code in working {
        match code_len(&code).cmp(&candidate_len) {
            Ordering::Equal => {
                let parent = truncate(&code, target_len).to_owned();
                groups.entry(parent).or_default().push(code);
            }
            Ordering::Greater => {
                results.insert(truncate(&code, cutoff).to_owned());
            }
            Ordering::Less => {
                next.insert(code);
            }
        }
    }

    let mut merged = 0usize;
    for (parent, children) in groups {
        if children.len() >= SIBLING_COUNT {
            next.insert(parent);
            merged += 1;
        } else {
            for child in children {
                results.insert(truncate(&child, cutoff).to_owned());
            }
        }
    }

    log::trace!(
        "Merged {} sibling groups into precision {}, {} codes carried forward",
        merged,
        target_len,
        next.len()
    );

    next
}

/// Precision of a code, counted in characters.
fn code_len(code: &str) -> usize {
    if code.is_ascii() {
        code.len()
    } else {
        code.chars().count()
    }
}

/// The first `len` characters of `code`, or all of it when shorter.
fn truncate(code: &str, len: usize) -> &str {
    match code.char_indices().nth(len) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}
