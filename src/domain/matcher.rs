//! Name lookups over an inventory snapshot.
//!
//! Both the query and the stored names are normalized before comparing, so lookups are
//! case-insensitive and tolerate records written with stray casing or spacing.

use super::component::{Component, normalize_name};

/// Position of the first component whose name equals `name` after normalization.
pub fn find_exact(components: &[Component], name: &str) -> Option<usize> {
    let name = normalize_name(name);
    components.iter().position(|component| normalize_name(&component.name) == name)
}

/// Components whose name contains `name` as a substring, in store order.
///
/// Only the stored name is searched for the query; a query longer than a stored name
/// never matches it. Exact matches are excluded so the result only holds correction
/// candidates.
pub fn find_similar<'a>(components: &'a [Component], name: &str) -> Vec<&'a Component> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Vec::new();
    }
    components
        .iter()
        .filter(|component| {
            let stored = normalize_name(&component.name);
            stored != name && stored.contains(&name)
        })
        .collect()
}

/// Components whose name contains every search word, case-insensitively.
pub fn search<'a, S: AsRef<str>>(components: &'a [Component], words: &[S]) -> Vec<&'a Component> {
    let words: Vec<String> = words.iter().map(|word| word.as_ref().to_uppercase()).collect();
    components
        .iter()
        .filter(|component| {
            let name = normalize_name(&component.name);
            words.iter().all(|word| name.contains(word.as_str()))
        })
        .collect()
}
