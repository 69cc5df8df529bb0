//! Commands and the policy that gatekeeps them.

pub mod command;
pub mod policy;

pub use command::Command;
pub use policy::{CommandPolicy, PolicyState, RejectionHandler, RejectionLog};
