//! Per-iteration telemetry for the traced solver variant.

/// Snapshot of solver state after one iteration of the growth loop.
///
/// Captured after the relaxation pass, so the keys and parents reflect
/// every improvement the newly attached vertex made available.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanStep {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Vertex attached to the tree in this iteration.
    pub selected: usize,
    /// Tentative linking keys for every vertex, post-relaxation.
    pub keys: Vec<f64>,
    /// Tentative parents for every vertex, post-relaxation.
    pub parents: Vec<Option<usize>>,
}

/// Ordered step snapshots from one traced construction.
///
/// The trace holds exactly one step per attached vertex; a disconnected
/// network therefore produces fewer steps than the network has vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanTrace {
    /// Steps in attachment order.
    pub steps: Vec<SpanStep>,
}

impl SpanTrace {
    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace recorded no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
