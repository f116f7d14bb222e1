use serde::{Deserialize, Serialize};

/// Ordinal urgency of a diagnostic; lower is more routine
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(pub u32);

impl Severity {
    /// Build progress reporting
    pub const PROGRESS: Severity = Severity(2);
    pub const NOTICE: Severity = Severity(3);
    pub const WARNING: Severity = Severity(4);
    pub const ERROR: Severity = Severity(5);
}

/// Receiver of structured progress/error messages
///
/// Posting is fire-and-forget and must not block on unbounded I/O.
pub trait DiagnosticSink: Send + Sync {
    fn post(&self, message: &str, severity: Severity);
}
