// ABOUTME: Per-run counters for the retention engine.
// ABOUTME: Emitted once as a summary when the inventory pass completes.

/// Aggregate result of one pass over the inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Images taken from the inventory and resolved.
    pub examined: usize,
    /// Images whose name is on the allow-list.
    pub kept: usize,
    /// Removal requests sent to the runtime.
    pub removal_requests: usize,
    /// `Deleted` outcomes across all removals.
    pub deleted: usize,
    /// `Untagged` outcomes across all removals.
    pub untagged: usize,
    /// Removal requests that returned an error.
    pub failed: usize,
    /// Images that would have been removed in a dry run.
    pub would_remove: usize,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
