use super::*;

fn draft(pairs: &[(&str, &str)]) -> ResumeDraft {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn section_changed_detects_edits() {
    let saved = draft(&[("summary", "Engineer")]);
    let live = draft(&[("summary", "Senior engineer")]);
    assert!(section_changed(&live, &saved, "summary"));
    assert!(!section_changed(&live, &saved, "skills"));
}

#[test]
fn section_changed_treats_missing_as_empty() {
    let saved = ResumeDraft::new();
    assert!(!section_changed(&draft(&[("skills", "")]), &saved, "skills"));
    assert!(section_changed(&draft(&[("skills", "Rust")]), &saved, "skills"));
}

#[test]
fn reverting_text_clears_change() {
    let saved = draft(&[("experience", "Acme")]);
    let live = draft(&[("experience", "Acme")]);
    assert!(!section_changed(&live, &saved, "experience"));
}

#[test]
fn saved_template_defaults_to_classic() {
    assert_eq!(saved_template(&ResumeDraft::new()), "classic");
    assert_eq!(saved_template(&draft(&[(TEMPLATE_SECTION, "")])), "classic");
    assert_eq!(saved_template(&draft(&[(TEMPLATE_SECTION, "modern")])), "modern");
}

#[test]
fn section_ids_are_unique_and_distinct_from_template() {
    let ids: Vec<&str> = RESUME_SECTIONS.iter().map(|(id, _)| *id).collect();
    for (i, a) in ids.iter().enumerate() {
        assert_ne!(*a, TEMPLATE_SECTION);
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn loading_draft_clears_sections_restored_from_last_visit() {
    use std::sync::Arc;

    use crate::state::dirty::{DIRTY_SECTIONS_KEY, DIRTY_STATE_KEY};
    use crate::util::storage::MemoryStorage;

    let memory = MemoryStorage::new();
    memory.set(DIRTY_STATE_KEY, "true");
    memory.set(DIRTY_SECTIONS_KEY, r#"["template"]"#);
    memory.set(DRAFT_KEY, r#"{"summary":"Engineer","template":"modern"}"#);
    let dirty = DirtyStore::new(Arc::new(memory.clone()));
    assert!(dirty.is_dirty());

    let loaded = load_draft(&memory, &dirty);
    for (section, _) in RESUME_SECTIONS {
        dirty.track(section_changed(&loaded, &loaded, section), Some(section));
    }

    assert_eq!(saved_template(&loaded), "modern");
    assert!(!dirty.is_dirty());
    assert!(dirty.snapshot().sections().is_empty());
    assert!(!memory.contains(DIRTY_STATE_KEY));
    assert!(!memory.contains(DIRTY_SECTIONS_KEY));
}

#[test]
fn loading_draft_clears_restored_whole_form_flag() {
    use std::sync::Arc;

    use crate::state::dirty::DIRTY_STATE_KEY;
    use crate::util::storage::MemoryStorage;

    let memory = MemoryStorage::new();
    memory.set(DIRTY_STATE_KEY, "true");
    let dirty = DirtyStore::new(Arc::new(memory.clone()));
    assert!(dirty.is_dirty());

    assert!(load_draft(&memory, &dirty).is_empty());
    assert!(!dirty.is_dirty());
}
