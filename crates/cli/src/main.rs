mod args;
mod render;
mod steps;

use std::process::ExitCode;

use flow::{NodeCategory, check_category_pair};

use args::{Args, Command};

fn main() -> ExitCode {
    let args = Args::default();

    #[cfg(debug_assertions)]
    {
        use util::debug_log;
        if args.no_debug_logging {
            debug_log::disable();
        } else if args.debug_error_log_panics {
            debug_log::panic_on_errors::enable();
        }
    }

    match args.command {
        Command::Matrix => {
            print!("{}", render::matrix_table());
            ExitCode::SUCCESS
        }
        Command::Check { source, target } => check(source, target),
        Command::Palette => {
            print!("{}", render::palette_listing());
            ExitCode::SUCCESS
        }
        Command::Session { steps } => match steps::replay(&steps) {
            Ok(session) => {
                print!("{}", render::graph_listing(session.graph()));
                ExitCode::SUCCESS
            }
            Err((position, e)) => util::report::failure(
                format!("Step {position} (`{}`) failed", steps[position - 1]),
                e,
            ),
        },
    }
}

fn check(source: NodeCategory, target: NodeCategory) -> ExitCode {
    match check_category_pair(source, target) {
        Ok(()) => {
            println!("{source} -> {target}: allowed");
            ExitCode::SUCCESS
        }
        Err(rule) => {
            util::debug_log_warning!("Rejected {source} -> {target}");
            println!("{source} -> {target}: rejected ({rule})");
            ExitCode::FAILURE
        }
    }
}
