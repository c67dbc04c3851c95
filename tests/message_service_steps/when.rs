//! When steps for message service BDD scenarios.

use super::world::{MessageWorld, run_async};
use message_service::message::domain::MessageId;
use rstest_bdd_macros::when;

#[when("the draft is submitted")]
fn submit_draft(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let draft = world
        .pending_draft
        .take()
        .ok_or_else(|| eyre::eyre!("no pending draft in scenario world"))?;
    world.last_result = Some(run_async(world.service.create_message(&draft)));
    world.pending_draft = Some(draft);
    Ok(())
}

#[when("message {id:i64} is requested")]
fn request_message(world: &mut MessageWorld, id: i64) {
    world.last_result = Some(run_async(world.service.get_message(MessageId::new(id))));
}
