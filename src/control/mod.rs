/*!
Shared control for a solve --- the branch counter and the solved flag.

A [SearchControl] is created for each top-level solve and threaded through every recursive call by reference.
Keeping the state on an explicit structure (rather than process-wide statics) allows multiple independent solves to run without interference, and makes the search procedures testable in isolation.

Two pieces of state steer the search:

- The *branch counter* notes how many branch decisions are outstanding across all tasks of the solve.
  The count is read at each branch point to choose between the parallel and sequential [branch strategies](crate::procedures::branch), bounding the number of simultaneously live search tasks on deep formulas.
- The *solved flag* is raised the moment any task derives the empty formula.
  The flag is inspected at the entry of every recursive call, and a raised flag abandons the call.
  The flag is advisory: work already in flight when the flag is raised runs to completion, so the savings are best-effort and run-dependent.

All orderings are relaxed --- the counter is a heuristic bound and the flag advisory, so no access synchronises with any other.

```rust
# use stoat_sat::control::SearchControl;
let control = SearchControl::new(1);

let level = control.enter_branch();
assert_eq!(level, 0);
assert!(control.parallel_permitted(level));

let level = control.enter_branch();
assert!(!control.parallel_permitted(level));

control.exit_branch();
control.exit_branch();
assert_eq!(control.counters().peak_branches, 2);
```
*/

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::context::Counters;

/// Shared control state for one solve.
pub struct SearchControl {
    /// The number of outstanding branch points below which branching is parallel.
    branch_threshold: usize,

    /// The count of outstanding branch points, over all tasks of the solve.
    branches: AtomicUsize,

    /// Raised when some task has derived the empty formula.
    solved: AtomicBool,

    /// The count of simultaneously live parallel branch points.
    parallel_branches: AtomicUsize,

    /// The count of propagations made.
    propagations: AtomicUsize,

    /// The count of branch decisions made.
    decisions: AtomicUsize,

    /// High-water mark of `branches`.
    peak_branches: AtomicUsize,

    /// High-water mark of `parallel_branches`.
    peak_parallel_branches: AtomicUsize,
}

impl SearchControl {
    /// Fresh control state, branching in parallel below `branch_threshold` outstanding branch points.
    pub fn new(branch_threshold: usize) -> Self {
        SearchControl {
            branch_threshold,
            branches: AtomicUsize::new(0),
            solved: AtomicBool::new(false),
            parallel_branches: AtomicUsize::new(0),
            propagations: AtomicUsize::new(0),
            decisions: AtomicUsize::new(0),
            peak_branches: AtomicUsize::new(0),
            peak_parallel_branches: AtomicUsize::new(0),
        }
    }

    /// Notes entry to a branch point and returns the count of branch points outstanding at entry.
    pub fn enter_branch(&self) -> usize {
        let level = self.branches.fetch_add(1, Ordering::Relaxed);
        self.peak_branches.fetch_max(level + 1, Ordering::Relaxed);
        self.decisions.fetch_add(1, Ordering::Relaxed);
        level
    }

    /// Notes that the work of a branch point is complete.
    pub fn exit_branch(&self) {
        self.branches.fetch_sub(1, Ordering::Relaxed);
    }

    /// Whether a branch point entered at `level` outstanding branch points may branch in parallel.
    pub fn parallel_permitted(&self, level: usize) -> bool {
        level < self.branch_threshold
    }

    /// Notes entry to a parallel branch point.
    pub fn enter_parallel(&self) {
        let live = self.parallel_branches.fetch_add(1, Ordering::Relaxed);
        self.peak_parallel_branches
            .fetch_max(live + 1, Ordering::Relaxed);
    }

    /// Notes that both tasks of a parallel branch point have been joined.
    pub fn exit_parallel(&self) {
        self.parallel_branches.fetch_sub(1, Ordering::Relaxed);
    }

    /// Whether some task has found a solution.
    pub fn solution_found(&self) -> bool {
        self.solved.load(Ordering::Relaxed)
    }

    /// Makes other tasks aware a solution has been found.
    pub fn flag_solution(&self) {
        self.solved.store(true, Ordering::Relaxed);
    }

    /// Notes a propagation.
    pub fn note_propagation(&self) {
        self.propagations.fetch_add(1, Ordering::Relaxed);
    }

    /// A snapshot of the counters of the solve.
    pub fn counters(&self) -> Counters {
        Counters {
            propagations: self.propagations.load(Ordering::Relaxed),
            decisions: self.decisions.load(Ordering::Relaxed),
            peak_branches: self.peak_branches.load(Ordering::Relaxed),
            peak_parallel_branches: self.peak_parallel_branches.load(Ordering::Relaxed),
        }
    }
}
