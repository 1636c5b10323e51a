//! Branch strategies --- two ways to explore both values of a branch literal.
//!
//! - [sequential]: propagate the literal with its recorded polarity and recurse; if that yields no solution, flip the polarity and repeat.
//! - [parallel]: spawn one search task per polarity and wait for both to complete.
//!
//! Under either strategy the recorded polarity is preferred when both succeed, so which value wins at a single branch point does not depend on scheduling.
//! Both tasks of a parallel branch always run to completion --- there is no cancellation of an in-flight sibling after the other has found a solution, only the advisory solved-flag check at the entry of each deeper call.

use crate::{
    control::SearchControl,
    misc::log::targets::{self},
    procedures::{propagate::propagate, solve::dpll},
    structures::{
        formula::Formula,
        literal::{CLiteral, Literal},
        solution::Solution,
    },
};

/// Propagates `literal` through `cnf` and recurses on the derived formula.
///
/// On success the literal is merged into the returned solution, as the derived formula no longer mentions its atom.
pub fn recurse_once(cnf: &Formula, literal: CLiteral, control: &SearchControl) -> Option<Solution> {
    control.note_propagation();

    let derived = propagate(literal, cnf);
    let mut solution = dpll(&derived, control)?;

    solution.assign(literal);
    Some(solution)
}

/// Explores `literal` and then, on failure, its negation, in sequence on the calling task.
pub fn sequential(cnf: &Formula, literal: CLiteral, control: &SearchControl) -> Option<Solution> {
    match recurse_once(cnf, literal, control) {
        Some(solution) => Some(solution),
        None => recurse_once(cnf, literal.negate(), control),
    }
}

/// Explores `literal` and its negation in concurrent tasks, joining both before returning.
///
/// A failure to spawn a task, or a panic within one, is fatal to the solve.
pub fn parallel(cnf: &Formula, literal: CLiteral, control: &SearchControl) -> Option<Solution> {
    control.enter_parallel();

    let solution = std::thread::scope(|scope| {
        let this_branch = scope.spawn(|| recurse_once(cnf, literal, control));
        let that_branch = scope.spawn(|| recurse_once(cnf, literal.negate(), control));

        let this_solution = match this_branch.join() {
            Ok(solution) => solution,
            Err(e) => std::panic::resume_unwind(e),
        };
        let that_solution = match that_branch.join() {
            Ok(solution) => solution,
            Err(e) => std::panic::resume_unwind(e),
        };

        this_solution.or(that_solution)
    });

    control.exit_parallel();
    log::trace!(target: targets::BRANCH, "parallel branch on {literal} joined");

    solution
}
