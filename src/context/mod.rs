/*!
The context --- to which formulas are added and within which solves take place.

A context bundles a formula with a configuration, and after a solve holds the outcome: a state, counters, and (on satisfiability) a solution.

# Example

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let p_q = the_context.clause_from_string("1 2").unwrap();
let not_p_not_q = the_context.clause_from_string("-1 -2").unwrap();

the_context.add_clause(p_q);
the_context.add_clause(not_p_not_q);

assert_eq!(the_context.solve(), Report::Satisfiable);

let solution = the_context.solution().unwrap();
assert!(solution.value_of(1) != solution.value_of(2));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    control::SearchControl,
    procedures::solve,
    reports::Report,
    structures::{atom::Atom, formula::Formula, solution::Solution},
};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The formula of the context is known to be satisfiable, with a solution stored.
    Satisfiable,

    /// The formula of the context is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context, made of a formula, a configuration, and the result of the most recent solve.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The formula of the context.
    pub formula: Formula,

    /// Counters from the most recent solve.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// The solution found by the most recent solve, if one was found.
    solution: Option<Solution>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            formula: Formula::new(),
            counters: Counters::default(),
            state: ContextState::Input,
            solution: None,
        }
    }

    /// Determines the satisfiability of the formula of the context.
    ///
    /// Control state is created fresh from the configuration for each call, so repeated solves (and solves on distinct contexts) do not interfere.
    pub fn solve(&mut self) -> Report {
        let control = SearchControl::new(self.config.branch_threshold.value);

        let solution = solve::dpll(&self.formula, &control);
        self.counters = control.counters();

        match solution {
            Some(solution) => {
                self.solution = Some(solution);
                self.state = ContextState::Satisfiable;
            }
            None => {
                self.solution = None;
                self.state = ContextState::Unsatisfiable;
            }
        }

        self.report()
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The solution found by the most recent solve, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// The value of `atom` on the solution of the most recent solve, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.solution.as_ref().and_then(|solution| solution.value_of(atom))
    }
}
