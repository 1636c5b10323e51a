use std::io::BufRead;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{atom::ATOM_MAX, clause::Clause},
    types::err::{self, ErrorKind},
};

/// Details from parsing a DIMACS representation of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserInfo {
    /// The number of atoms stated by the problem line.
    pub expected_atoms: usize,

    /// The number of clauses stated by the problem line.
    pub expected_clauses: usize,

    /// The number of clauses added to the context.
    pub added_clauses: usize,
}

/// The atom and clause counts of a problem line of the shape `p cnf <atoms> <clauses>`.
fn problem_details(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut details = line.split_whitespace();

    if details.next() != Some("p") || details.next() != Some("cnf") {
        return Err(err::ParseError::ProblemSpecification.into());
    }

    let atoms: usize = match details.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(err::ParseError::ProblemSpecification.into()),
    };

    let clauses: usize = match details.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(err::ParseError::ProblemSpecification.into()),
    };

    // No trailing data after the final item on the line, and both counts positive.
    if details.next().is_some() || atoms < 1 || clauses < 1 || atoms > ATOM_MAX as usize {
        return Err(err::ParseError::ProblemSpecification.into());
    }

    Ok((atoms, clauses))
}

impl Context {
    /// Reads a DIMACS representation of a formula into the context.
    ///
    /// The reader is strict:
    /// - Comment lines are permitted only before the problem line.
    /// - The problem line must have the shape `p cnf <atoms> <clauses>`, with both counts positive.
    /// - Exactly `<clauses>` clauses must follow, as whitespace-separated nonzero integers with each clause terminated by a `0`, and nothing may follow the final clause.
    ///
    /// On any error the context is not to be used --- part of the formula may have been added.
    ///
    /// ```rust
    /// # use stoat_sat::config::Config;
    /// # use stoat_sat::context::Context;
    /// # use stoat_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = "
    /// c A pair of incompatible atoms.
    /// p cnf 2 2
    ///  1  2 0
    /// -1 -2 0
    /// ";
    ///
    /// assert!(the_context.read_dimacs(dimacs.trim_start().as_bytes()).is_ok());
    /// assert_eq!(the_context.solve(), Report::Satisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read the preamble: comments, then the problem line.
        let (expected_atoms, expected_clauses) = 'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ParseError::UnexpectedEnd.into()),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.chars().next() {
                Some('c') => continue 'preamble_loop,
                Some('p') => break 'preamble_loop problem_details(&buffer)?,
                _ => return Err(err::ParseError::Preamble.into()),
            }
        };

        log::debug!(target: targets::PARSER,
            "expecting {expected_atoms} atoms over {expected_clauses} clauses"
        );

        // Second phase, read the formula.
        let mut clause_buffer = Clause::new();
        let mut added_clauses = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            for item in buffer.split_whitespace() {
                if added_clauses == expected_clauses {
                    return Err(err::ParseError::TrailingData.into());
                }

                let int = match item.parse::<isize>() {
                    Ok(int) => int,
                    Err(_) => {
                        return Err(err::ParseError::InvalidLiteral(item.to_string()).into())
                    }
                };

                match int {
                    0 => {
                        let the_clause = std::mem::take(&mut clause_buffer);
                        self.formula.add_clause(the_clause);
                        added_clauses += 1;
                    }

                    _ => clause_buffer.add(super::literal_from_int(int)?),
                }
            }
        }

        if added_clauses < expected_clauses {
            return Err(err::ParseError::UnexpectedEnd.into());
        }

        log::debug!(target: targets::PARSER, "added {added_clauses} clauses");
        self.state = ContextState::Input;

        Ok(ParserInfo {
            expected_atoms,
            expected_clauses,
            added_clauses,
        })
    }
}
