/*!
Configuration of a context.

All configuration for a context is contained within a [Config] structure, fixed when the context is created.
Each option is recorded as a [ConfigOption], pairing the value of the option with its name and permitted range.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The number of outstanding branch points below which a branch decision is explored in parallel.
    ///
    /// At each branch point the count of outstanding branch points is inspected.
    /// If the count is (strictly) below the threshold both polarities of the branch literal are explored in concurrent tasks, and otherwise in sequence on the deciding task.
    /// So, the threshold bounds the number of simultaneously live parallel branch points, and a threshold of `0` forces a fully sequential (and so deterministic) solve.
    pub branch_threshold: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration permits a handful of parallel branch points --- enough to occupy a small machine without flooding a large formula with tasks.
    fn default() -> Self {
        Config {
            branch_threshold: ConfigOption {
                name: "branch_threshold",
                min: 0,
                max: usize::MAX,
                value: 4,
            },
        }
    }
}
