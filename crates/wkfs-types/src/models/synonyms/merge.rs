use std::collections::HashSet;

/// Keep the last `max` entries of `list`, preserving order.
pub fn keep_last<T: Clone>(list: &[T], max: usize) -> Vec<T> {
    let start = list.len().saturating_sub(max);
    list[start..].to_vec()
}

/// Compute the complete synonym list to submit for a subject.
///
/// 1. translated candidates are cut to their last `max` entries
/// 2. existing synonyms come first, then the candidates
/// 3. duplicates are dropped, first occurrence wins
/// 4. the union is cut to its last `max` entries
pub fn merge_synonyms(existing: &[String], translated: &[String], max: usize) -> Vec<String> {
    let translated = keep_last(translated, max);

    let mut seen = HashSet::with_capacity(existing.len() + translated.len());
    let merged: Vec<String> = existing
        .iter()
        .chain(translated.iter())
        .filter(|synonym| seen.insert(*synonym))
        .cloned()
        .collect();

    keep_last(&merged, max)
}
