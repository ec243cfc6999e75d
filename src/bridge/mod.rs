//! The scripting bridge: named callbacks and the JSON messages that invoke
//! them.

pub mod callbacks;
pub mod messages;

pub use callbacks::{Callback, CallbackRegistry};
pub use messages::{BridgeRequest, BridgeResponse};
