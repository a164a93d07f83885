//! # Goal edit synchronisation
//!
//! UI-free core of the goal editor. The frontend drives these types from its
//! event handlers; nothing here touches the DOM or the network.
//!
//! An edit flows through the system exactly once:
//!
//! ```text
//! GoalEdit ──► GoalEditor::apply ──► GoalUpdate ──┬──► goals store
//!                                                 └──► WriteScheduler ──► WriteQueue ──► remote service
//! ```
//!
//! - [`editor`]: local draft state, field merging and the icon picker flag
//! - [`scheduler`]: debounce slots for keystroke edits in front of the queue
//! - [`write_queue`]: per-goal serialised remote writes where later edits
//!   supersede queued ones

pub mod editor;
pub mod scheduler;
pub mod write_queue;

pub use editor::{parse_amount, GoalDraft, GoalEdit, GoalEditor, GoalUpdate, IconPicker, WritePolicy};
pub use scheduler::{Submitted, WriteScheduler};
pub use write_queue::{QueuedWrite, WriteQueue, WriteStatus};
