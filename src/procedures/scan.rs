//! A single-pass classification of a formula.
//!
//! One linear pass over the clauses of a formula settles what the solve should do next, as a [Scan]:
//! - An empty formula is satisfied, as there is no clause left to satisfy.
//! - A formula containing an empty clause is impossible to satisfy, and the pass returns on the *first* empty clause found --- any unit recorded beforehand is discarded, and remaining clauses are not inspected.
//! - A unit clause forces its literal.
//!   If several unit clauses exist the recorded literal is overwritten as the pass iterates, so the *last* unit clause in formula order wins.
//! - Otherwise, a decision is required, on the first literal of the first clause in formula order.
//!
//! The unit tie-break and the decision literal are behaviourally significant for which of possibly many satisfying assignments a solve returns, and both are fixed as above for determinism.

use crate::structures::{formula::Formula, literal::CLiteral};

/// The classification of a formula, from a [scan].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// The formula has no clauses, and so is satisfied.
    Satisfied,

    /// The formula contains an empty clause, and so is impossible to satisfy.
    EmptyClause,

    /// The formula contains a unit clause whose literal is forced, the last such in formula order.
    Unit(CLiteral),

    /// No literal is forced, and a decision on the given literal is required.
    Decision(CLiteral),
}

/// Classifies `cnf` in a single pass over its clauses.
pub fn scan(cnf: &Formula) -> Scan {
    let mut decision: Option<CLiteral> = None;
    let mut unit: Option<CLiteral> = None;

    for clause in cnf.clauses() {
        if clause.is_empty() {
            return Scan::EmptyClause;
        }

        if decision.is_none() {
            decision = clause.first_literal();
        }

        if let Some(literal) = clause.unit() {
            unit = Some(literal);
        }
    }

    match (unit, decision) {
        (Some(literal), _) => Scan::Unit(literal),
        (None, Some(literal)) => Scan::Decision(literal),
        (None, None) => Scan::Satisfied,
    }
}
