use mindgraph_core::{content_preview, expand, search, QueryError, Workspace, PREVIEW_MAX_CHARS};
use uuid::Uuid;

#[test]
fn empty_term_returns_all_notes_in_store_order() {
    let mut workspace = Workspace::new();
    let a = workspace.create_note("Alpha", "", &[]).unwrap();
    let b = workspace.create_note("Beta", "", &[]).unwrap();

    for term in ["", "   "] {
        let hits = workspace.search(term);
        let ids: Vec<_> = hits.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }
}

#[test]
fn search_matches_title_content_and_tags_case_insensitively() {
    let mut workspace = Workspace::new();
    let by_title = workspace.create_note("Thermodynamics", "", &[]).unwrap();
    let by_content = workspace
        .create_note("Other", "entropy always increases", &[])
        .unwrap();
    let by_tag = workspace
        .create_note("Tagged", "", &["Thermo".to_string()])
        .unwrap();
    workspace.create_note("Unrelated", "biology", &[]).unwrap();

    let hits = workspace.search("THERMO");
    let ids: Vec<_> = hits.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![by_title.id, by_tag.id]);

    let hits = workspace.search("Entropy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, by_content.id);
}

#[test]
fn search_is_idempotent_without_mutation() {
    let mut workspace = Workspace::new();
    workspace.create_note("note one", "shared", &[]).unwrap();
    workspace.create_note("note two", "shared", &[]).unwrap();

    let snapshot = workspace.snapshot();
    assert_eq!(search(&snapshot, "shared"), search(&snapshot, "shared"));
}

#[test]
fn filter_by_tag_is_case_insensitive() {
    let mut workspace = Workspace::new();
    let tagged = workspace
        .create_note("Tagged", "", &["Physics".to_string()])
        .unwrap();
    workspace.create_note("Untagged", "", &[]).unwrap();

    let hits = workspace.filter_by_tag("PHYSICS");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, tagged.id);
}

#[test]
fn expand_returns_note_neighbors_and_edges() {
    let mut workspace = Workspace::new();
    let center = workspace.create_note("Center", "", &[]).unwrap();
    let left = workspace.create_note("Left", "", &[]).unwrap();
    let right = workspace.create_note("Right", "", &[]).unwrap();
    workspace.create_note("Far away", "", &[]).unwrap();
    workspace.connect(center.id, left.id, "out").unwrap();
    workspace.connect(right.id, center.id, "in").unwrap();

    let view = workspace.expand(center.id).unwrap();
    assert_eq!(view.note.id, center.id);
    assert_eq!(view.edges.len(), 2);

    let neighbor_ids: Vec<_> = view.neighbors.iter().map(|n| n.id).collect();
    assert_eq!(neighbor_ids, vec![left.id, right.id]);
}

#[test]
fn expand_unknown_note_fails_with_not_found() {
    let workspace = Workspace::new();
    let ghost = Uuid::new_v4();
    assert_eq!(
        expand(&workspace.snapshot(), ghost).unwrap_err(),
        QueryError::NoteNotFound(ghost)
    );
}

#[test]
fn preview_sanitizes_math_heavy_note_content() {
    let content = "Work-energy theorem: $$W = \\Delta KE$$ applies when $F$ is net force.";
    let preview = content_preview(content, PREVIEW_MAX_CHARS).unwrap();
    assert!(!preview.contains('$'));
    assert!(preview.starts_with("Work-energy theorem"));
}
