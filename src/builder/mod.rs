/*!
Tools for building a context.

The library has two basic methods for building a context:
- [add_clause](crate::context::Context::add_clause), to append a clause to the formula of the context.
- [read_dimacs](crate::context::Context::read_dimacs), to read a full DIMACS representation of a formula.

And, for convenience, [clause_from_string](crate::context::Context::clause_from_string) builds a single clause from its DIMACS form.

# Example

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let clause_a = the_context.clause_from_string("1 -2").unwrap();
let clause_b = the_context.clause_from_string("-1 2").unwrap();

the_context.add_clause(clause_a);
the_context.add_clause(clause_b);

assert_eq!(the_context.solve(), Report::Satisfiable);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{Context, ContextState},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The literal written as `int` in DIMACS form, so long as `int` is nonzero and its atom is in range.
pub(crate) fn literal_from_int(int: isize) -> Result<CLiteral, ErrorKind> {
    match Atom::try_from(int.unsigned_abs()) {
        Ok(atom) if atom != 0 && atom <= ATOM_MAX => Ok(CLiteral::new(atom, int.is_positive())),
        _ => Err(err::ParseError::InvalidLiteral(int.to_string()).into()),
    }
}

impl Context {
    /// Appends a clause to the formula of the context.
    ///
    /// Any clause is accepted --- in particular, adding an empty clause makes the formula unsatisfiable.
    pub fn add_clause(&mut self, clause: Clause) {
        self.formula.add_clause(clause);
        self.state = ContextState::Input;
    }

    /// A clause built from a whitespace-separated string of literals in integer form, with a terminating `0` as optional.
    ///
    /// ```rust
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::context::Context;
    /// let the_context = Context::from_config(Config::default());
    /// let clause = the_context.clause_from_string("1 -2 3 0").unwrap();
    /// assert_eq!(clause.size(), 3);
    /// ```
    pub fn clause_from_string(&self, string: &str) -> Result<Clause, ErrorKind> {
        let mut clause = Clause::new();

        for item in string.split_whitespace() {
            let int = match item.parse::<isize>() {
                Ok(int) => int,
                Err(_) => return Err(err::ParseError::InvalidLiteral(item.to_string()).into()),
            };

            if int == 0 {
                break;
            }

            clause.add(literal_from_int(int)?);
        }

        Ok(clause)
    }
}
