//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod attack;
mod create;
mod initiative;
mod roll;
mod save;
mod skill;

pub use attack::Attack;
pub use create::Create;
pub use initiative::Initiative;
pub use roll::Roll;
pub use save::Save;
pub use skill::Skill;
