use std::cell::RefCell;
use std::rc::Rc;

use mindgraph_core::{Snapshot, Workspace};

#[test]
fn every_committed_mutation_publishes_exactly_one_snapshot() {
    let mut workspace = Workspace::new();
    let snapshots: Rc<RefCell<Vec<Snapshot>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&snapshots);
    workspace.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    let a = workspace.create_note("A", "", &[]).unwrap();
    let b = workspace.create_note("B", "", &[]).unwrap();
    workspace.connect(a.id, b.id, "relates").unwrap();
    workspace.delete_note(a.id).unwrap();

    let seen = snapshots.borrow();
    assert_eq!(seen.len(), 4);

    // The delete is coalesced: its single snapshot already has both the
    // note and the cascaded edge gone.
    let last = &seen[3];
    assert_eq!(last.notes.len(), 1);
    assert_eq!(last.notes[0].id, b.id);
    assert!(last.edges.is_empty());
}

#[test]
fn failed_operations_publish_nothing() {
    let mut workspace = Workspace::new();
    let count = Rc::new(RefCell::new(0_u32));

    let counter = Rc::clone(&count);
    workspace.subscribe(move |_| *counter.borrow_mut() += 1);

    workspace.create_note("", "invalid", &[]).unwrap_err();
    let a = workspace.create_note("A", "", &[]).unwrap();
    workspace.connect(a.id, a.id, "loop").unwrap_err();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn panicking_subscriber_does_not_break_the_mutation_or_peers() {
    let mut workspace = Workspace::new();
    let delivered = Rc::new(RefCell::new(0_u32));

    workspace.subscribe(|_| panic!("broken view"));
    let counter = Rc::clone(&delivered);
    workspace.subscribe(move |_| *counter.borrow_mut() += 1);

    let note = workspace.create_note("survives", "", &[]).unwrap();

    assert_eq!(*delivered.borrow(), 1);
    assert!(workspace.get_note(note.id).is_some());
}

#[test]
fn unsubscribed_views_stop_receiving() {
    let mut workspace = Workspace::new();
    let count = Rc::new(RefCell::new(0_u32));

    let counter = Rc::clone(&count);
    let id = workspace.subscribe(move |_| *counter.borrow_mut() += 1);

    workspace.create_note("first", "", &[]).unwrap();
    assert!(workspace.unsubscribe(id));
    workspace.create_note("second", "", &[]).unwrap();

    assert_eq!(*count.borrow(), 1);
}
