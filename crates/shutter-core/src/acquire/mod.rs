//! The acquisition half of the pipeline.
//!
//! - **session**: the Idle -> choice -> launch -> completion state machine,
//!   including the pending-capture workaround for unreliable camera results
//! - **resolve**: opaque locator -> readable file path
//! - **index**: the SQLite media index behind resolution

pub mod index;
pub mod resolve;
pub mod session;

// Re-exports for convenient access
pub use index::{MediaIndex, SqliteMediaIndex};
pub use resolve::LocatorResolver;
pub use session::{
    AcquireChoice, AcquisitionSession, ActionLauncher, ActionOutcome, ActionResult,
    CaptureRequest, Completion, PickRequest,
};
