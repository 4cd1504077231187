//! End-to-end wizard behaviour: flow definition → composition → navigation

use booking_core::wizard::{
    FlowDefinition, StepBody, StepHost, StepId, Steps, WizardError, WizardSession,
};

#[derive(Debug, Default)]
struct Page {
    visits: usize,
}

impl StepBody for Page {
    fn mount(&mut self) {
        self.visits += 1;
    }
}

const FLOW: &str = r#"
title = "Test flow"

[[children]]
kind = "step"
id = "a"

[[children]]
kind = "step"
id = "b"

[[children]]
kind = "step"
id = "c"
"#;

fn compose(flow: &FlowDefinition) -> Result<Steps<Page>, WizardError> {
    Steps::compose(&flow.children, |_| Ok(Page::default()))
}

#[test]
fn scenario_from_flow_definition() {
    let flow = FlowDefinition::from_toml(FLOW).unwrap();
    let session = WizardSession::new();
    let handle = session.handle();
    let mut steps = compose(&flow).unwrap();
    let mut host = StepHost::new();

    steps.sync(&handle).unwrap();
    let step = host.update(&mut steps, &handle).unwrap().unwrap();
    assert_eq!(step.id, StepId::from("a"));

    handle.on_next().unwrap();
    handle.on_next().unwrap();
    handle.on_next().unwrap();
    assert_eq!(handle.active_step_index().unwrap(), 2);
    assert!(handle.is_last_step().unwrap());

    handle.on_previous().unwrap();
    assert_eq!(handle.active_step_index().unwrap(), 1);

    handle.go_to(0).unwrap();
    handle.go_to(5).unwrap();
    assert_eq!(handle.active_step_index().unwrap(), 0);

    let step = host.update(&mut steps, &handle).unwrap().unwrap();
    assert_eq!(step.id, StepId::from("a"));
    assert_eq!(step.body.visits, 1);
}

#[test]
fn revisiting_a_step_mounts_it_again() {
    let flow = FlowDefinition::from_toml(FLOW).unwrap();
    let session = WizardSession::new();
    let handle = session.handle();
    let mut steps = compose(&flow).unwrap();
    let mut host = StepHost::new();
    steps.sync(&handle).unwrap();

    for command in [1usize, 0, 1, 0] {
        host.update(&mut steps, &handle).unwrap();
        handle.go_to(command).unwrap();
    }
    host.update(&mut steps, &handle).unwrap();

    assert_eq!(steps.get(0).unwrap().body.visits, 3);
    assert_eq!(steps.get(1).unwrap().body.visits, 2);
    assert_eq!(steps.get(2).unwrap().body.visits, 0);
}

#[test]
fn flow_with_foreign_child_is_rejected() {
    let flow = FlowDefinition::from_toml(
        r#"
[[children]]
kind = "step"
id = "a"

[[children]]
kind = "divider"
id = "x"
"#,
    )
    .unwrap();

    let err = compose(&flow).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid child at position 1: expected a step, got `divider`"
    );
}

#[test]
fn flow_without_children_is_rejected() {
    let flow = FlowDefinition::from_toml("title = \"empty\"").unwrap();
    assert!(matches!(compose(&flow), Err(WizardError::EmptyComposition)));
}

#[tokio::test]
async fn validated_advance_through_flow() {
    let flow = FlowDefinition::from_toml(FLOW).unwrap();
    let session = WizardSession::new();
    let handle = session.handle();
    compose(&flow).unwrap().sync(&handle).unwrap();

    let gate = |open: bool| move || async move { if open { Ok(()) } else { Err("not yet") } };

    let blocked = handle.on_next_with(gate(false)).await;
    assert!(blocked.is_err());
    assert_eq!(handle.active_step_index().unwrap(), 0);

    let advanced = handle.on_next_with(gate(true)).await.unwrap();
    assert!(advanced);
    assert_eq!(
        handle.active_step().unwrap().unwrap().id,
        StepId::from("b")
    );
}
