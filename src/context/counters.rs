/// Counters from the most recent solve of a context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The count of propagations made.
    pub propagations: usize,

    /// The count of branch decisions made.
    pub decisions: usize,

    /// High-water mark of outstanding branch points, over all tasks.
    pub peak_branches: usize,

    /// High-water mark of simultaneously live parallel branch points.
    pub peak_parallel_branches: usize,
}
