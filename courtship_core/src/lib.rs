//! # Courtship Core
//!
//! The engine crate of the courtship workspace. It interfaces with
//! `social_rules`, scores gifted items against NPC preferences, and drives
//! per-player puzzle sessions through to their relationship and inventory
//! effects.
//!
//! ## Core Components
//!
//! - **gift_scoring**: Pure, bounded preference scoring over profile rules
//! - **puzzle_engine**: Puzzle catalog plus the per-player session state machine
//! - **collaborators**: Ports the engine emits relationship, inventory,
//!   notification, and player-record effects into
//!
//! ## Design Philosophy
//!
//! - **Result-shaped failures**: Missing puzzles and sessions come back as
//!   outcome variants for callers to branch on, never as raised errors
//! - **Explicit wiring**: No globals or singletons; stores, catalogs, and
//!   engines are constructed and injected at the composition root
//! - **Synchronous**: Every operation runs to completion; a multi-threaded
//!   host serializes per-player access externally

pub mod collaborators;
pub mod gift_scoring;
pub mod puzzle_engine;

pub use collaborators::*;
pub use gift_scoring::*;
pub use puzzle_engine::*;
