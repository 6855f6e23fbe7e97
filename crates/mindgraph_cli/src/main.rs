//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mindgraph_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use mindgraph_core::{content_preview, Workspace, PREVIEW_MAX_CHARS};

fn main() {
    println!("mindgraph_core version={}", mindgraph_core::core_version());

    let mut workspace = Workspace::new();
    let kinematics = workspace
        .create_note(
            "Kinematics",
            "Equations of motion: $v = u + at$ and $s = ut + \\frac{1}{2}at^2$",
            &["physics".to_string()],
        )
        .expect("create note");
    let dynamics = workspace
        .create_note("Dynamics", "Newton's laws", &["physics".to_string()])
        .expect("create note");
    workspace
        .connect(kinematics.id, dynamics.id, "precedes")
        .expect("connect notes");

    println!(
        "notes={} edges={} physics_hits={}",
        workspace.list_notes().len(),
        workspace.list_edges().len(),
        workspace.search("physics").len()
    );
    println!(
        "preview={}",
        content_preview(&kinematics.content, PREVIEW_MAX_CHARS).unwrap_or_default()
    );
}
