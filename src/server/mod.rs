//! Accepting connections and handing them to handlers.

pub mod dispatch;
pub mod listener;
