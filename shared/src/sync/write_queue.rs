use std::collections::HashMap;

use crate::Goal;

/// A write handed to the transport. `seq` identifies it when it completes.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedWrite {
    pub seq: u64,
    pub goal: Goal,
}

/// Remote save state of one goal, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Idle,
    Saving,
    Failed(String),
}

#[derive(Debug, Default)]
struct GoalWrites {
    in_flight: Option<u64>,
    queued: Option<Goal>,
    failed: Option<(Goal, String)>,
}

impl GoalWrites {
    fn is_empty(&self) -> bool {
        self.in_flight.is_none() && self.queued.is_none() && self.failed.is_none()
    }
}

/// Serialises remote writes per goal ID.
///
/// At most one write per goal is in flight. Records submitted meanwhile
/// replace each other in a single queued slot, so the newest record is
/// always the last one written.
#[derive(Debug, Default)]
pub struct WriteQueue {
    next_seq: u64,
    goals: HashMap<String, GoalWrites>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a record. Returns the write to start now, or `None` when a
    /// write for this goal is already in flight and the record was queued.
    pub fn submit(&mut self, goal: Goal) -> Option<QueuedWrite> {
        let seq = self.next_seq;
        let writes = self.goals.entry(goal.id.clone()).or_default();
        writes.failed = None;

        if writes.in_flight.is_some() {
            writes.queued = Some(goal);
            return None;
        }

        writes.in_flight = Some(seq);
        self.next_seq += 1;
        Some(QueuedWrite { seq, goal })
    }

    /// Record the outcome of a write. Returns the queued write to start
    /// next, if any. Completions for writes that are not in flight are
    /// ignored.
    pub fn complete(&mut self, write: &QueuedWrite, result: Result<(), String>) -> Option<QueuedWrite> {
        let writes = self.goals.get_mut(&write.goal.id)?;
        if writes.in_flight != Some(write.seq) {
            return None;
        }
        writes.in_flight = None;

        let next = match writes.queued.take() {
            Some(goal) => {
                // A newer record supersedes whatever just failed
                writes.failed = None;
                writes.in_flight = Some(self.next_seq);
                let queued = QueuedWrite { seq: self.next_seq, goal };
                self.next_seq += 1;
                Some(queued)
            }
            None => {
                if let Err(message) = result {
                    writes.failed = Some((write.goal.clone(), message));
                }
                None
            }
        };

        if writes.is_empty() {
            self.goals.remove(&write.goal.id);
        }
        next
    }

    /// Resubmit the record whose write last failed
    pub fn retry(&mut self, goal_id: &str) -> Option<QueuedWrite> {
        let (goal, _) = self.goals.get_mut(goal_id)?.failed.take()?;
        self.submit(goal)
    }

    pub fn status(&self, goal_id: &str) -> WriteStatus {
        match self.goals.get(goal_id) {
            Some(writes) if writes.in_flight.is_some() || writes.queued.is_some() => WriteStatus::Saving,
            Some(GoalWrites { failed: Some((_, message)), .. }) => WriteStatus::Failed(message.clone()),
            _ => WriteStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(id: &str, name: &str) -> Goal {
        Goal {
            id: id.to_string(),
            name: name.to_string(),
            target_date: NaiveDate::from_ymd_opt(2026, 12, 24).unwrap(),
            target_amount: 100.0,
            icon: None,
        }
    }

    #[test]
    fn test_first_submit_starts_immediately() {
        let mut queue = WriteQueue::new();

        let write = queue.submit(goal("goal::a", "A")).expect("write should start");

        assert_eq!(write.goal.name, "A");
        assert_eq!(queue.status("goal::a"), WriteStatus::Saving);
    }

    #[test]
    fn test_later_edits_supersede_queued_ones() {
        let mut queue = WriteQueue::new();
        let first = queue.submit(goal("goal::a", "B")).unwrap();

        assert!(queue.submit(goal("goal::a", "Bi")).is_none());
        assert!(queue.submit(goal("goal::a", "Bik")).is_none());
        assert!(queue.submit(goal("goal::a", "Bike")).is_none());

        let second = queue.complete(&first, Ok(())).expect("queued write should start");
        assert_eq!(second.goal.name, "Bike");
        assert!(second.seq > first.seq);

        assert!(queue.complete(&second, Ok(())).is_none());
        assert_eq!(queue.status("goal::a"), WriteStatus::Idle);
    }

    #[test]
    fn test_goals_are_queued_independently() {
        let mut queue = WriteQueue::new();

        assert!(queue.submit(goal("goal::a", "A")).is_some());
        assert!(queue.submit(goal("goal::b", "B")).is_some());
        assert!(queue.submit(goal("goal::a", "A2")).is_none());
    }

    #[test]
    fn test_failed_write_is_reported_and_retryable() {
        let mut queue = WriteQueue::new();
        let write = queue.submit(goal("goal::a", "A")).unwrap();

        assert!(queue.complete(&write, Err("Network error".to_string())).is_none());
        assert_eq!(queue.status("goal::a"), WriteStatus::Failed("Network error".to_string()));

        let retried = queue.retry("goal::a").expect("retry should start a write");
        assert_eq!(retried.goal.name, "A");
        assert_eq!(queue.status("goal::a"), WriteStatus::Saving);
        assert!(queue.retry("goal::a").is_none());
    }

    #[test]
    fn test_queued_write_supersedes_failure() {
        let mut queue = WriteQueue::new();
        let first = queue.submit(goal("goal::a", "A")).unwrap();
        queue.submit(goal("goal::a", "A2"));

        let next = queue.complete(&first, Err("timeout".to_string())).unwrap();
        assert_eq!(next.goal.name, "A2");

        queue.complete(&next, Ok(()));
        assert_eq!(queue.status("goal::a"), WriteStatus::Idle);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut queue = WriteQueue::new();
        let first = queue.submit(goal("goal::a", "A")).unwrap();
        queue.submit(goal("goal::a", "A2"));
        let second = queue.complete(&first, Ok(())).unwrap();

        // Completing the first write again must not release the second
        assert!(queue.complete(&first, Ok(())).is_none());
        assert_eq!(queue.status("goal::a"), WriteStatus::Saving);

        queue.complete(&second, Ok(()));
        assert_eq!(queue.status("goal::a"), WriteStatus::Idle);
    }

    #[test]
    fn test_new_submit_clears_failure() {
        let mut queue = WriteQueue::new();
        let write = queue.submit(goal("goal::a", "A")).unwrap();
        queue.complete(&write, Err("boom".to_string()));

        let next = queue.submit(goal("goal::a", "A3")).unwrap();
        assert_eq!(queue.status("goal::a"), WriteStatus::Saving);
        queue.complete(&next, Ok(()));
        assert!(queue.retry("goal::a").is_none());
    }
}
