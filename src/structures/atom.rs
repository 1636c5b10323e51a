/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things to which assigning a (boolean) value (true or false) is of interest.

Atoms are identified by positive integers, and the external (DIMACS) identifier of an atom is used directly as its internal representation.
So, the atom written `7` in some DIMACS formula is the atom `7` within the library.

# Notes
- `0` is never the identifier of an atom --- in the DIMACS format `0` terminates a clause.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Chosen so any atom, with either polarity, may be written as a signed integer in DIMACS form.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
