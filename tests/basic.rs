use stoat_sat::{config::Config, context::Context, reports::Report};

mod basic {
    use super::*;

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.formula.is_empty());

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert!(ctx.solution().is_some_and(|solution| solution.is_empty()));
    }

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.clause_from_string("1").unwrap();
        ctx.add_clause(p);

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.value_of(1), Some(true));
    }

    #[test]
    fn unit_conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.clause_from_string("1").unwrap();
        let not_p = ctx.clause_from_string("-1").unwrap();

        ctx.add_clause(p);
        ctx.add_clause(not_p);

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert!(ctx.solution().is_none());
    }

    #[test]
    fn one_of_each_polarity() {
        let mut ctx = Context::from_config(Config::default());

        let p_q = ctx.clause_from_string("1 2").unwrap();
        let not_p_not_q = ctx.clause_from_string("-1 -2").unwrap();

        ctx.add_clause(p_q);
        ctx.add_clause(not_p_not_q);

        assert_eq!(ctx.solve(), Report::Satisfiable);

        // Any model is acceptable, so long as it is a model.
        let solution = ctx.solution().unwrap();
        assert!(solution.satisfies(&ctx.formula));
        assert_eq!(solution.atom_count(), 2);
        assert!(solution.value_of(1) != solution.value_of(2));
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        let p_q = ctx.clause_from_string("1 2").unwrap();
        let empty = ctx.clause_from_string("").unwrap();

        ctx.add_clause(p_q);
        ctx.add_clause(empty);

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn report_follows_state() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(format!("{}", ctx.state), "Input");

        ctx.solve();
        assert_eq!(ctx.report(), Report::Satisfiable);

        // Further input returns the context to an unknown state.
        let empty = ctx.clause_from_string("").unwrap();
        ctx.add_clause(empty);
        assert_eq!(ctx.report(), Report::Unknown);

        ctx.solve();
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }
}

mod structures {
    use super::*;
    use stoat_sat::structures::literal::{ABLiteral, Literal};

    #[test]
    fn literal_forms() {
        let p = ABLiteral::new(7, true);

        assert_eq!(p.as_int(), 7);
        assert_eq!((-p).as_int(), -7);
        assert_eq!(p.negate().negate(), p);
        assert_eq!(p.canonical(), p);
        assert_eq!(format!("{}", -p), "-7");
    }

    #[test]
    fn duplicates() {
        let ctx = Context::from_config(Config::default());

        let clause = ctx.clause_from_string("1 1 2 2").unwrap();
        assert_eq!(clause.size(), 2);
    }

    #[test]
    fn duplicate_atom_overwrites() {
        let ctx = Context::from_config(Config::default());

        let clause = ctx.clause_from_string("1 -1").unwrap();
        assert_eq!(clause.size(), 1);
        assert_eq!(clause.polarity_of(1), Some(false));
    }

    #[test]
    fn clause_order_is_atom_order() {
        let ctx = Context::from_config(Config::default());

        let clause = ctx.clause_from_string("3 -1 2").unwrap();
        assert_eq!(clause.first_literal(), Some(ABLiteral::new(1, false)));
        assert_eq!(clause.as_dimacs(true), "-1 2 3 0");
    }

    #[test]
    fn config_default_in_range() {
        let config = Config::default();
        let (min, max) = config.branch_threshold.min_max();

        assert!(min <= config.branch_threshold.value && config.branch_threshold.value <= max);
    }
}

mod procedures {
    use super::*;
    use stoat_sat::{
        control::SearchControl,
        procedures::{
            propagate::propagate,
            scan::{scan, Scan},
            solve::dpll,
        },
        structures::{
            formula::Formula,
            literal::{ABLiteral, Literal},
        },
    };

    fn formula_from_strings(strings: &[&str]) -> Formula {
        let ctx = Context::from_config(Config::default());
        strings
            .iter()
            .map(|string| ctx.clause_from_string(string).unwrap())
            .collect()
    }

    #[test]
    fn propagate_cases() {
        let cnf = formula_from_strings(&["1 2", "-1 3", "4 5"]);

        let derived = propagate(ABLiteral::new(1, true), &cnf);

        // The satisfied clause is dropped, the opposing clause loses its mention, the rest are untouched.
        let mut clauses = derived.clauses();
        assert_eq!(clauses.next().unwrap().as_dimacs(false), "3");
        assert_eq!(clauses.next().unwrap().as_dimacs(false), "4 5");
        assert!(clauses.next().is_none());

        // The source formula is untouched.
        assert_eq!(cnf.clause_count(), 3);
    }

    #[test]
    fn propagate_to_empty_clause() {
        let cnf = formula_from_strings(&["2", "-2"]);

        let derived = propagate(ABLiteral::new(2, true), &cnf);
        assert_eq!(scan(&derived), Scan::EmptyClause);
    }

    #[test]
    fn scan_short_circuits_on_empty_clause() {
        // A unit appears before the empty clause, and is discarded.
        let cnf = formula_from_strings(&["1", "", "2"]);

        assert_eq!(scan(&cnf), Scan::EmptyClause);
    }

    #[test]
    fn scan_last_unit_wins() {
        let cnf = formula_from_strings(&["1 2", "3", "-4"]);

        assert_eq!(scan(&cnf), Scan::Unit(ABLiteral::new(4, false)));
    }

    #[test]
    fn scan_decision_is_first_of_first() {
        let cnf = formula_from_strings(&["3 -2", "4 5"]);

        // The first literal of a clause is its first in atom order.
        assert_eq!(scan(&cnf), Scan::Decision(ABLiteral::new(2, false)));
    }

    #[test]
    fn unit_propagation_fixes_consequences() {
        let mut ctx = Context::from_config(Config::default());

        for string in ["1", "-1 2", "-2 3"] {
            let clause = ctx.clause_from_string(string).unwrap();
            ctx.add_clause(clause);
        }

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.value_of(1), Some(true));
        assert_eq!(ctx.value_of(2), Some(true));
        assert_eq!(ctx.value_of(3), Some(true));
    }

    #[test]
    fn dpll_respects_a_raised_flag() {
        let control = SearchControl::new(0);
        control.flag_solution();

        // Even the empty formula is abandoned once the flag is raised.
        assert_eq!(dpll(&Formula::new(), &control), None);
    }

    #[test]
    fn dpll_raises_the_flag() {
        let control = SearchControl::new(0);

        let solution = dpll(&Formula::new(), &control);
        assert!(solution.is_some_and(|solution| solution.is_empty()));
        assert!(control.solution_found());
    }

    #[test]
    fn sequential_solves_are_identical() {
        let strings = ["1 2 3", "-1 -2", "-2 -3", "-1 -3", "2 -3"];

        let mut solutions = Vec::new();
        for _ in 0..2 {
            let mut config = Config::default();
            config.branch_threshold.value = 0;

            let mut ctx = Context::from_config(config);
            for string in strings {
                let clause = ctx.clause_from_string(string).unwrap();
                ctx.add_clause(clause);
            }

            assert_eq!(ctx.solve(), Report::Satisfiable);
            assert_eq!(ctx.counters.peak_parallel_branches, 0);

            let solution = ctx.solution().unwrap();
            assert!(solution.satisfies(&ctx.formula));
            solutions.push(format!("{solution:?}"));
        }

        assert_eq!(solutions[0], solutions[1]);
    }
}
