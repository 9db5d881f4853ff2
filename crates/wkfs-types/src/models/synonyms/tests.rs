use super::merge::merge_synonyms;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_merge_keeps_first_occurrence_order() {
    let merged = merge_synonyms(&strings(&["a", "b"]), &strings(&["b", "c"]), 8);

    assert_eq!(merged, strings(&["a", "b", "c"]));
}

#[test]
fn test_merge_without_existing_record() {
    let merged = merge_synonyms(&[], &strings(&["eau", "water-ish"]), 8);

    assert_eq!(merged, strings(&["eau", "water-ish"]));
}

#[test]
fn test_merge_dedups_within_translations() {
    let merged = merge_synonyms(&[], &strings(&["eau", "eau", "onde"]), 8);

    assert_eq!(merged, strings(&["eau", "onde"]));
}

#[test]
fn test_merge_dedups_within_existing() {
    let merged = merge_synonyms(&strings(&["x", "x"]), &strings(&["y"]), 8);

    assert_eq!(merged, strings(&["x", "y"]));
}

#[test]
fn test_merge_is_stable_when_already_applied() {
    let existing = strings(&["montagne", "mont"]);
    let translated = strings(&["montagne", "mont"]);

    let first = merge_synonyms(&existing, &translated, 8);
    let second = merge_synonyms(&first, &translated, 8);

    assert_eq!(first, existing);
    assert_eq!(second, first);
}

#[test]
fn test_merge_is_case_sensitive() {
    let merged = merge_synonyms(&strings(&["Eau"]), &strings(&["eau"]), 8);

    assert_eq!(merged, strings(&["Eau", "eau"]));
}
