//! Observability for the menu widget.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with page and component context
//! - `LogBuilder` - Fluent construction of entries with extra fields
//! - `LogSink` - Where formatted entries end up (browser console or stderr)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
