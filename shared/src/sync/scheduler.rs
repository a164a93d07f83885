use std::collections::BTreeMap;

use crate::sync::editor::{GoalUpdate, WritePolicy};
use crate::sync::write_queue::{QueuedWrite, WriteQueue, WriteStatus};
use crate::Goal;

/// What the caller has to do after [`WriteScheduler::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    /// Held back; call [`WriteScheduler::timer_elapsed`] with this
    /// generation once the debounce delay has passed
    Deferred { generation: u64 },
    /// Send this write now
    Started(QueuedWrite),
    /// Waiting behind the write already in flight for this goal
    Queued,
}

#[derive(Debug)]
struct PendingEdit {
    generation: u64,
    goal: Goal,
}

/// Debounce slots in front of a [`WriteQueue`].
///
/// A debounced record waits in a per-goal slot tagged with a generation.
/// Each new record for the goal takes a fresh generation, so only the
/// newest timer can release the slot. Flushing or an immediate record
/// empties the slot, after which the old timer finds nothing to send.
#[derive(Debug, Default)]
pub struct WriteScheduler {
    next_generation: u64,
    pending: BTreeMap<String, PendingEdit>,
    queue: WriteQueue,
}

impl WriteScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, update: GoalUpdate) -> Submitted {
        match update.policy {
            WritePolicy::Immediate => {
                self.pending.remove(&update.goal.id);
                match self.queue.submit(update.goal) {
                    Some(write) => Submitted::Started(write),
                    None => Submitted::Queued,
                }
            }
            WritePolicy::Debounced => {
                self.next_generation += 1;
                let generation = self.next_generation;
                self.pending.insert(
                    update.goal.id.clone(),
                    PendingEdit {
                        generation,
                        goal: update.goal,
                    },
                );
                Submitted::Deferred { generation }
            }
        }
    }

    /// A debounce timer fired. Returns the write to start when the timer is
    /// still the newest one for the goal and a write can start.
    pub fn timer_elapsed(&mut self, goal_id: &str, generation: u64) -> Option<QueuedWrite> {
        let current = self
            .pending
            .get(goal_id)
            .is_some_and(|pending| pending.generation == generation);
        if !current {
            return None;
        }
        self.flush(goal_id)
    }

    /// Move the pending record for `goal_id` to the queue now
    pub fn flush(&mut self, goal_id: &str) -> Option<QueuedWrite> {
        let pending = self.pending.remove(goal_id)?;
        self.queue.submit(pending.goal)
    }

    /// Move every pending record to the queue, returning the writes to start
    pub fn flush_all(&mut self) -> Vec<QueuedWrite> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .into_values()
            .filter_map(|pending| self.queue.submit(pending.goal))
            .collect()
    }

    pub fn complete(&mut self, write: &QueuedWrite, result: Result<(), String>) -> Option<QueuedWrite> {
        self.queue.complete(write, result)
    }

    pub fn retry(&mut self, goal_id: &str) -> Option<QueuedWrite> {
        self.queue.retry(goal_id)
    }

    /// A goal with an unsent debounced record counts as saving
    pub fn status(&self, goal_id: &str) -> WriteStatus {
        if self.pending.contains_key(goal_id) {
            return WriteStatus::Saving;
        }
        self.queue.status(goal_id)
    }
}
