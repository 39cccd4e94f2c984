// src/main.rs

use clap::Parser;

use calc::cli::{run, HELP_TEXT};

#[derive(Parser)]
#[command(
    name = "calc",
    about = "A command-line calculator",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Show help message and exit
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// Show version and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Calculation arguments: <operand1> <operator> <operand2> or
    /// <operator> <operand>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.help {
        print!("{HELP_TEXT}");
        std::process::exit(0);
    }

    if cli.version {
        println!("calc {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    std::process::exit(run(&cli.args));
}
