//! Solutions, aka. satisfying assignments.
//!
//! A solution maps atoms to values, and is built bottom-up during a solve: each level of the search adds exactly the one literal it fixed.
//! As propagation discards satisfied clauses together with the atoms they alone mention, a solution may be partial with respect to the atoms of the original formula --- any value works for an unmentioned atom.

use std::collections::BTreeMap;

use crate::structures::{
    atom::Atom,
    formula::Formula,
    literal::{CLiteral, Literal},
};

/// The implementation of a solution as an ordered map from atoms to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: BTreeMap<Atom, bool>,
}

impl Solution {
    /// A fresh, empty, solution.
    pub fn new() -> Self {
        Solution {
            values: BTreeMap::new(),
        }
    }

    /// Records the value of the atom of `literal` as the polarity of `literal`.
    pub fn assign(&mut self, literal: CLiteral) {
        self.values.insert(literal.atom(), literal.polarity());
    }

    /// The value of `atom` on the solution, if `atom` has been assigned a value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(&atom).copied()
    }

    /// The number of atoms assigned a value.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// Whether no atom has been assigned a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// An iterator over the assignments of the solution, in atom order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, bool)> + '_ {
        self.values.iter().map(|(atom, value)| (*atom, *value))
    }

    /// Whether every clause of `formula` contains some literal whose polarity matches the solution.
    ///
    /// ```rust
    /// # use stoat_sat::structures::formula::Formula;
    /// # use stoat_sat::structures::literal::{ABLiteral, Literal};
    /// # use stoat_sat::structures::solution::Solution;
    /// let formula = Formula::from_iter([[ABLiteral::new(1, true), ABLiteral::new(2, false)].into_iter().collect()]);
    ///
    /// let mut solution = Solution::new();
    /// solution.assign(ABLiteral::new(2, false));
    ///
    /// assert!(solution.satisfies(&formula));
    /// ```
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.clauses().all(|clause| {
            clause
                .literals()
                .any(|literal| self.value_of(literal.atom()) == Some(literal.polarity()))
        })
    }
}
