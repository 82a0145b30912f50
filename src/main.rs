/**
 * Take randomized quizzes from a question bank on the command line.
 */
use colored::*;
use structopt::StructOpt;

use bankquiz::cmd;
use bankquiz::common::{is_broken_pipe, Options};


fn main() {
    let options = Options::from_args();

    let result = match options {
        Options::Take(options) => cmd::main_take(options),
        Options::Count(options) => cmd::main_count(options),
    };

    if let Err(e) = result {
        if !is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}
