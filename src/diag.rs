//! Diagnostic channel for load failures.
//!
//! Errors are never fatal to the host: the loader catches every failure,
//! reports it exactly once through a [`DiagnosticSink`], and returns it to
//! the caller. The default sink forwards to the `log` crate; tests swap in
//! a recording sink to count emissions.

use crate::error::Error;

/// Sink for operator-visible error reporting.
///
/// No structured schema is imposed: a sink receives the error value and
/// does whatever reporting makes sense for the host.
pub trait DiagnosticSink: Send + Sync {
    /// Report a load failure.
    fn report(&self, source: &str, error: &Error);
}

/// Default sink that reports through `log::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, source: &str, error: &Error) {
        log::error!("failed to load {}: {}", source, error);
    }
}
