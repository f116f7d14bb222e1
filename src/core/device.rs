use crate::config::BuildConfig;
use crate::core::clock::LogicalClock;
use crate::core::diagnostics::LogSink;
use crate::core::engine::BvhEngine;
use crate::core::handle::{HandleKind, HandleTable, NativeHandle};
use crate::traits::diagnostics::{DiagnosticSink, Severity};
use crate::traits::engine::AccelerationEngine;
use std::sync::Arc;

/// Native build context
///
/// Owns the acceleration engine, the diagnostic sink, the logical clock and the
/// native handle table. Passed explicitly to every build and lifecycle call;
/// callers serialize access to it.
pub struct Device {
    engine: Box<dyn AccelerationEngine>,
    sink: Arc<dyn DiagnosticSink>,
    clock: LogicalClock,
    handles: HandleTable,
    config: BuildConfig,
}

impl Device {
    /// Device with the in-process BVH engine, logging diagnostics
    pub fn new(config: BuildConfig) -> Self {
        Self {
            engine: Box::new(BvhEngine::new(&config)),
            sink: Arc::new(LogSink),
            clock: LogicalClock::new(),
            handles: HandleTable::new(),
            config,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_engine(mut self, engine: Box<dyn AccelerationEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn clock(&self) -> &LogicalClock {
        &self.clock
    }

    pub fn handles(&self) -> &HandleTable {
        &self.handles
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    pub fn engine_mut(&mut self) -> &mut dyn AccelerationEngine {
        self.engine.as_mut()
    }

    pub fn allocate(&self, kind: HandleKind) -> NativeHandle {
        self.handles.allocate(kind)
    }

    pub fn post(&self, message: &str, severity: Severity) {
        self.sink.post(message, severity);
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}
