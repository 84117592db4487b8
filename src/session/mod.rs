//! Durable session state shared across requests
//!
//! The only state is the reuse flag behind [`SessionState`]. Storage goes
//! through the [`FlagStore`] trait; [`FileFlagStore`] is the persistent
//! implementation.

mod file;
mod memory;
mod state;
mod traits;

pub use file::FileFlagStore;
pub use memory::MemoryFlagStore;
pub use state::{SearchMode, SessionState};
pub use traits::{FlagStore, OpenFlagStore, SessionError, SessionResult};
