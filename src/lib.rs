//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! stoat_sat determines satisfiability with the plain DPLL algorithm --- unit propagation and case-split branching --- together with a bounded-parallel exploration of the resulting search tree.
//! Branch points are explored in concurrent tasks while a shared counter of outstanding branch points is below a configured threshold, and in sequence otherwise, with a shared flag to abandon (best-effort) further search once some task has found a solution.
//!
//! The design goal is a correct, simply-structured recursive search with an explicit concurrency knob.
//! In particular, stoat_sat is *not* a conflict-driven clause-learning solver: there is no clause learning, no watched literals, no activity heuristics, and no restarts.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a configuration, and clauses may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Useful starting points may be:
//! - The high-level [solve procedure](crate::procedures::solve) for the dynamics of a solve.
//! - The [control structure](crate::control) for the branch counter and solved flag shared by the tasks of a solve.
//! - The [structures] to familiarise yourself with the elements of a solve and their representation (formulas, clauses, etc.).
//! - The [configuration](crate::config) to see what is configurable (in short: the branch threshold).
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = "
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.trim_start().as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! ```
//!
//! + Build a formula directly and inspect the solution found.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::clause::Clause;
//! # use stoat_sat::structures::literal::{ABLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p_or_q = Clause::from_iter([ABLiteral::new(1, true), ABLiteral::new(2, true)]);
//! let not_p = Clause::from_iter([ABLiteral::new(1, false)]);
//!
//! the_context.add_clause(p_or_q);
//! the_context.add_clause(not_p);
//!
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//! assert_eq!(the_context.value_of(1), Some(false));
//! assert_eq!(the_context.value_of(2), Some(true));
//! ```
//!
//! # Determinism
//!
//! With a branch threshold of `0` a solve is fully sequential and two solves of the same formula return identical assignments.
//! Under parallel branching which of possibly many satisfying assignments is returned can vary run to run --- see [procedures::solve] for details.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, logs are verbose.
//!
//! The targets are listed in [misc::log].

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod control;
pub mod structures;
pub mod types;

pub mod misc;
pub mod reports;
