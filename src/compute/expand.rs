//! Expansion of geohash cells into their children.

use super::codec::BASE32;

/// Return the 32 children of `code` one precision level deeper, in alphabet
/// order.
///
/// # Examples
///
/// ```
/// use proxhash::compute::expand::expand;
///
/// let children = expand("tdnu2");
/// assert_eq!(children.len(), 32);
/// assert_eq!(children[0], "tdnu20");
/// assert_eq!(children[31], "tdnu2z");
/// ```
pub fn expand(code: &str) -> Vec<String> {
    BASE32
        .iter()
        .map(|c| {
            let mut child = String::with_capacity(code.len() + 1);
            child.push_str(code);
            child.push(*c);
            child
        })
        .collect()
}

/// Expand every code in `codes` one level, concatenating the children.
pub fn expand_all<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    codes.iter().flat_map(|c| expand(c.as_ref())).collect()
}

/// Expand `code` `depth` times, yielding all 32^depth descendants at
/// precision `code.len() + depth`.
///
/// A depth of zero returns `code` itself.
pub fn expand_to(code: &str, depth: usize) -> Vec<String> {
    let mut codes = vec![code.to_owned()];
    for _ in 0..depth {
        codes = expand_all(&codes);
    }
    codes
}
