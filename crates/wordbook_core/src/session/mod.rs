//! Interactive console session.
//!
//! # Responsibility
//! - Parse the two positional command-line arguments.
//! - Drive find/write modes and the post-mode prompts as a state machine.
//!
//! # Invariants
//! - Only one session owns the in-memory collection at a time.
//! - End of input never aborts; it routes to the final save.

pub mod args;
pub mod console;
pub mod machine;

pub use args::{parse_args, Invocation, Mode, UsageError, USAGE};
pub use console::Console;
pub use machine::{SaveAnswer, Session, SessionEnd, SessionState, SwitchAnswer};
