//! 服務層模組
//!
//! 提供快照構建、單槽連線廣播、接受迴圈與會話入口

pub mod broadcast;
pub mod session;
pub mod snapshot;

// Re-export 入口實際取用的類型
pub use broadcast::{accept_loop, new_slot};
pub use session::{Decision, Session, SessionConfig};
