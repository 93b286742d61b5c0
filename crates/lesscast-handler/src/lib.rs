//! Storage event handler for the Lesscast pipeline.
//!
//! One invocation handles one storage notification: each record is
//! classified by object key and routed to either the transcode dispatcher
//! (video uploads) or a full feed rebuild (audio changes). There is no
//! state between invocations and no coordination between concurrent ones;
//! every rebuild re-derives the feed from live bucket contents.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod notification;
pub mod rebuild;

pub use config::HandlerConfig;
pub use error::{HandlerError, HandlerResult};
pub use handler::EventHandler;
pub use notification::parse_notification;
