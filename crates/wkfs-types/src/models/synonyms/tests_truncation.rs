use super::merge::{keep_last, merge_synonyms};

fn letters(range: std::ops::RangeInclusive<char>) -> Vec<String> {
    range.map(|c| c.to_string()).collect()
}

#[test]
fn test_keep_last_prefers_later_entries() {
    let ten: Vec<u32> = (1..=10).collect();

    assert_eq!(keep_last(&ten, 8), vec![3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_keep_last_short_list_untouched() {
    assert_eq!(keep_last(&[1, 2], 8), vec![1, 2]);
    assert!(keep_last::<u32>(&[], 8).is_empty());
}

#[test]
fn test_translated_candidates_cut_before_merge() {
    let translated = letters('a'..='j');

    let merged = merge_synonyms(&[], &translated, 8);

    assert_eq!(merged, letters('c'..='j'));
}

#[test]
fn test_existing_at_cap_drops_oldest() {
    let existing = letters('a'..='h');

    let merged = merge_synonyms(&existing, &["x".to_string()], 8);

    assert_eq!(merged, vec!["b", "c", "d", "e", "f", "g", "h", "x"]);
}

#[test]
fn test_union_never_exceeds_cap() {
    for existing_len in 0..=8usize {
        for translated_len in 0..=12usize {
            let existing: Vec<String> = (0..existing_len).map(|i| format!("old-{i}")).collect();
            let translated: Vec<String> =
                (0..translated_len).map(|i| format!("new-{i}")).collect();

            let merged = merge_synonyms(&existing, &translated, 8);

            assert!(merged.len() <= 8, "{existing_len}+{translated_len} -> {}", merged.len());
            if translated_len > 0 {
                assert_eq!(merged.last(), translated.last());
            }
        }
    }
}

#[test]
fn test_custom_cap() {
    let merged = merge_synonyms(&letters('a'..='c'), &letters('d'..='e'), 3);

    assert_eq!(merged, vec!["c", "d", "e"]);
}
