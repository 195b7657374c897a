//! Session orchestration
//!
//! Bridges the clap entry point with the collector, aggregator, and
//! spreadsheet writer.

pub mod session;

pub use session::{run_session, SessionOptions};
