//! Per-invocation citation collector.

use crate::domain::catalog::Source;

/// Collects the sources one tool invocation produced.
///
/// A tool that cites passages calls [`reset`](Self::reset) and then
/// [`record`](Self::record)s one source per passage. When the invocation
/// finishes the registry replaces its accumulated sources with the sink's
/// contents. A sink nobody touched leaves the accumulation alone.
#[derive(Debug, Default)]
pub struct CitationSink {
    replacement: Option<Vec<Source>>,
}

impl CitationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards whatever earlier invocations accumulated.
    pub fn reset(&mut self) {
        self.replacement = Some(Vec::new());
    }

    /// Appends a source for this invocation.
    pub fn record(&mut self, source: Source) {
        self.replacement.get_or_insert_with(Vec::new).push(source);
    }

    /// Sources that should replace the accumulation, if any.
    pub fn into_replacement(self) -> Option<Vec<Source>> {
        self.replacement
    }
}
