//! NPC profile definitions and registry.

mod factors;
mod npc;
mod store;

pub use factors::*;
pub use npc::*;
pub use store::*;
