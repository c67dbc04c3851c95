//! Given steps for message service BDD scenarios.

use super::world::{MessageWorld, run_async};
use eyre::WrapErr;
use message_service::message::domain::Message;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("an empty message store")]
fn an_empty_message_store(world: &MessageWorld) -> Result<(), eyre::Report> {
    if !world.repository.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty store, found {} messages",
            world.repository.len()
        ));
    }
    Ok(())
}

#[given(r#"a draft titled "{title}" with body "{body}""#)]
fn a_draft(world: &mut MessageWorld, title: String, body: String) {
    world.pending_draft = Some(Message::new(title, body, &DefaultClock));
}

#[given(r#"a draft with an empty title and body "{body}""#)]
fn a_draft_without_title(world: &mut MessageWorld, body: String) {
    world.pending_draft = Some(Message::new("", body, &DefaultClock));
}

#[given(r#"a draft titled "{title}" with an empty body"#)]
fn a_draft_without_body(world: &mut MessageWorld, title: String) {
    world.pending_draft = Some(Message::new(title, "", &DefaultClock));
}

#[given(r#"a stored message titled "{title}""#)]
fn a_stored_message(world: &mut MessageWorld, title: String) -> Result<(), eyre::Report> {
    let draft = Message::new(title, "the body", &DefaultClock);
    run_async(world.service.create_message(&draft))
        .wrap_err("store message for scenario")?;
    Ok(())
}
