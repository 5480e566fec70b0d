//! Stack Hook Handler
//!
//! Handles custom resource lifecycle events sent by the provisioning
//! controller. Each event runs through the same two steps:
//!
//! ```text
//! ┌────────────────────┐    ┌────────────────────┐
//! │   start workflow   │───▶│   report status    │──▶ "Done!"
//! │   (Create only)    │    │   (callback PUT)   │
//! └────────────────────┘    └────────────────────┘
//!           │ error                   │ error
//!           └───────────┬─────────────┘
//!                       ▼
//!           ┌────────────────────────┐
//!           │ report status: FAILED  │──▶ "Done!" (errors propagate)
//!           └────────────────────────┘
//! ```
//!
//! The callback is the only failure channel the controller observes. The
//! return value is the same on success and on a reported failure.

mod context;
mod error;
mod event;
mod handler;
mod replay;

pub use context::{InvocationContext, REASON_PREFIX};
pub use error::{HookError, ReplayError};
pub use event::{LifecycleEvent, RequestType, ResourceProperties};
pub use handler::{COMPLETION_MARKER, LifecycleHandler};
pub use replay::read_event;
