//! Remote write path for goal edits.
//!
//! Scheduling decisions live in [`WriteScheduler`]; this hook only supplies
//! the timers, the HTTP calls and the re-render after each step.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::sync::{GoalUpdate, QueuedWrite, Submitted, WriteScheduler, WriteStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct GoalWriter {
    api_client: ApiClient,
    debounce_ms: u32,
    scheduler: Rc<RefCell<WriteScheduler>>,
    on_change: Callback<()>,
}

impl GoalWriter {
    /// Send an update on according to its write policy
    pub fn submit(&self, update: GoalUpdate) {
        let goal_id = update.goal.id.clone();
        let submitted = self.scheduler.borrow_mut().submit(update);
        self.on_change.emit(());

        match submitted {
            Submitted::Deferred { generation } => self.start_timer(goal_id, generation),
            Submitted::Started(write) => self.drive(write),
            Submitted::Queued => {}
        }
    }

    /// Submit the pending record for `goal_id` now, if there is one
    pub fn flush(&self, goal_id: &str) {
        let write = self.scheduler.borrow_mut().flush(goal_id);
        self.on_change.emit(());
        if let Some(write) = write {
            self.drive(write);
        }
    }

    pub fn flush_all(&self) {
        let writes = self.scheduler.borrow_mut().flush_all();
        for write in writes {
            self.drive(write);
        }
    }

    /// Resend the record whose write last failed
    pub fn retry(&self, goal_id: &str) {
        let write = self.scheduler.borrow_mut().retry(goal_id);
        if let Some(write) = write {
            Logger::info_with_component("goal-writer", &format!("Retrying write for {}", goal_id));
            self.on_change.emit(());
            self.drive(write);
        }
    }

    pub fn status(&self, goal_id: &str) -> WriteStatus {
        self.scheduler.borrow().status(goal_id)
    }

    fn start_timer(&self, goal_id: String, generation: u64) {
        let writer = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(writer.debounce_ms).await;

            let write = writer.scheduler.borrow_mut().timer_elapsed(&goal_id, generation);
            writer.on_change.emit(());
            if let Some(write) = write {
                writer.drive(write);
            }
        });
    }

    /// Run writes for one goal back to back until its queue slot is empty
    fn drive(&self, first: QueuedWrite) {
        let writer = self.clone();
        spawn_local(async move {
            let mut next = Some(first);
            while let Some(write) = next.take() {
                let result = writer.api_client.update_goal(&write.goal).await.map(|_| ());
                if let Err(e) = &result {
                    Logger::error_with_component(
                        "goal-writer",
                        &format!("Failed to save goal {}: {}", write.goal.id, e),
                    );
                }
                next = writer.scheduler.borrow_mut().complete(&write, result);
                writer.on_change.emit(());
            }
        });
    }
}

/// Writer for goal updates, bound to the calling component's lifetime.
///
/// Pending debounced edits are flushed when the component unmounts.
#[hook]
pub fn use_goal_writer(api_client: &ApiClient, debounce_ms: u32) -> GoalWriter {
    let scheduler = use_mut_ref(WriteScheduler::new);
    let force_update = use_force_update();

    let writer = GoalWriter {
        api_client: api_client.clone(),
        debounce_ms,
        scheduler,
        on_change: Callback::from(move |_| force_update.force_update()),
    };

    {
        let writer = writer.clone();
        use_effect_with((), move |_| move || writer.flush_all());
    }

    writer
}
