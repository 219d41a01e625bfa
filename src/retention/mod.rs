// ABOUTME: Image retention decision and removal protocol.
// ABOUTME: Resolves names, consults the allow-list and reports removal outcomes.

mod engine;
mod error;
mod report;
pub mod resolver;
mod sink;

pub use engine::RetentionEngine;
pub use error::{
    ConfigUnavailableSnafu, InventoryUnavailableSnafu, RetentionError, Severity,
};
pub use report::RunReport;
pub use resolver::resolve;
pub use sink::{RemovalSink, TracingSink};
