use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn run_invokes_registered_action() {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let mut registry = ActionRegistry::new().with("save", move || {
        counter.set(counter.get() + 1);
        Flow::Continue
    });

    assert_eq!(registry.run(&"save".into()), Some(Flow::Continue));
    assert_eq!(registry.run(&"save".into()), Some(Flow::Continue));
    assert_eq!(hits.get(), 2);
    assert_eq!(registry.run(&"missing".into()), None);
}

#[test]
fn register_replaces_existing_action() {
    let mut registry = ActionRegistry::new().with("quit", || Flow::Continue);
    registry.register("quit", || Flow::Exit);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.run(&"quit".into()), Some(Flow::Exit));
}

#[test]
fn validate_reports_first_unknown_reference() {
    let registry = ActionRegistry::new().with("save", || Flow::Continue);
    let refs = [ActionId::from("save"), ActionId::from("reindent")];

    let err = registry.validate(refs.iter(), "file").unwrap_err();
    assert_eq!(
        err,
        PopupError::UnboundActionReference {
            action: "reindent".into(),
            owner: "file".into(),
        }
    );
    assert!(registry.validate(refs[..1].iter(), "file").is_ok());
}

#[test]
fn debug_lists_ids_only() {
    let registry = ActionRegistry::new()
        .with("save", || Flow::Continue)
        .with("quit", || Flow::Exit);
    assert_eq!(
        format!("{registry:?}"),
        "ActionRegistry { actions: [\"quit\", \"save\"] }"
    );
}
