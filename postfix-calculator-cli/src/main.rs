use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use postfix_calculator::interpreter::evaluate_expression;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The infix expression to evaluate, using single-digit operands
    #[clap(default_value = "3 + 4 * 2 / ( 1 - 5 ) * 2 * 3")]
    expression: String,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("evaluating expression: {}", args.expression);
    let result = evaluate_expression(args.expression)?;
    println!("Result: {}", result);
    Ok(())
}
