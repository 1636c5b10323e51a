//! Propagation of a literal through a formula.
//!
//! To propagate a literal is to derive the formula which remains to be satisfied given the atom of the literal is fixed to the polarity of the literal.
//! For each clause of the source formula:
//! - If the clause does not mention the atom, the clause is preserved.
//! - If the clause mentions the atom with the opposite polarity, the clause is preserved minus that one entry --- the fixed atom cannot satisfy the clause, though other literals of the clause still might.
//!   The reduced clause may be empty, in which case the derived formula is unsatisfiable, detected by a later [scan](crate::procedures::scan).
//! - If the clause mentions the atom with the same polarity, the clause is satisfied and dropped.
//!
//! The source formula is untouched --- propagation builds an entirely fresh formula, so sibling branches of a solve never observe each other's intermediate state.

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

/// The formula which remains to be satisfied given `literal`, derived from `cnf`.
///
/// Cost is linear in the size of `cnf`.
pub fn propagate(literal: CLiteral, cnf: &Formula) -> Formula {
    let mut derived = Formula::with_capacity(cnf.clause_count());

    for clause in cnf.clauses() {
        match clause.polarity_of(literal.atom()) {
            None => derived.add_clause(clause.clone()),

            Some(polarity) if polarity == literal.polarity() => {}

            Some(_) => derived.add_clause(clause.without(literal.atom())),
        }
    }

    log::trace!(target: targets::PROPAGATION,
        "{} of {} clauses remain after {literal}",
        derived.clause_count(),
        cnf.clause_count()
    );

    derived
}
