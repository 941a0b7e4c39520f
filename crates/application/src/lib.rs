//! simpledns application layer: resolver port, query dispatch, and the
//! request/reply handler loop.
pub mod handler;
pub mod ports;
pub mod request;
pub mod use_cases;

pub use handler::run_handler;
pub use request::{Request, ReplyReceiver};
