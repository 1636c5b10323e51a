//! Procedures of a solve, factored by task.
//!
//! The algorithm for determining satisfiability is a collection of procedures over [structures](crate::structures), steered by a [SearchControl](crate::control::SearchControl):
//! - [propagate] derives a reduced formula from fixing the value of an atom.
//! - [scan] classifies a formula in a single pass.
//! - [branch] explores both values of a branch literal, in sequence or in parallel.
//! - [solve] ties the above into the recursive search.

pub mod branch;
pub mod propagate;
pub mod scan;
pub mod solve;
