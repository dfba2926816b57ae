//! State Management
//!
//! Session, navigation shell and data loader state.

pub mod global;
pub mod loader;
pub mod session;
pub mod sidebar;
