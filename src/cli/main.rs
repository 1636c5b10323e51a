use stoat_sat::{config::Config, context::Context, reports::Report};

mod read;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut ctx: Context = Context::from_config(Config::default());

    let parse_result = match args.len() {
        1 => match ctx.read_dimacs(std::io::stdin().lock()) {
            Ok(_) => Ok(()),
            Err(e) => Err(read::ReadError::ParseError(e)),
        },

        2 => read::read_dimacs(&args[1], &mut ctx),

        _ => {
            eprintln!("Too many arguments");
            std::process::exit(1);
        }
    };

    if let Err(e) = parse_result {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let report = ctx.solve();

    println!("{report}");

    if report == Report::Satisfiable {
        if let Some(solution) = ctx.solution() {
            for (atom, value) in solution.iter() {
                println!("{atom}: {value}");
            }
        }
    }
}
