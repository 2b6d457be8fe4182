use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_interpreter::interpreter::tokens_to_string;
use expression_interpreter::interpreter::variable::{Variable, VariableValues};
use expression_interpreter::interpreter::Interpreter;
use log::{debug, info};

/// Calculates an integer expression such as "3 * (a + 2)"
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate
    expression: String,

    /// Assigns a value to a variable, e.g. `-s a=2`. Can be repeated.
    #[clap(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    assignments: Vec<(Variable, i32)>,

    /// Prints the parsed expression tree before the result
    #[clap(long)]
    tree: bool,

    /// Prints the expression with normalised spacing and brackets before the result
    #[clap(long)]
    infix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn parse_assignment(text: &str) -> Result<(Variable, i32), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found '{}'", text))?;
    let variable = Variable::new(name.trim()).map_err(|error| error.to_string())?;
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid value for '{}': {}", variable, error))?;
    Ok((variable, value))
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let interpreter = Interpreter::new(args.expression.as_str())
        .with_context(|| format!("could not register expression '{}'", args.expression))?;

    if args.tree {
        println!("{}", interpreter.expression_tree());
    }
    if args.infix {
        let tokens = interpreter.expression_tree().to_infix();
        println!("{}", tokens_to_string(tokens)?);
    }

    let values: VariableValues = args.assignments.into_iter().collect();
    debug!("Calculating with {} variable value(s)", values.len());
    let result = interpreter
        .calculate_with(&values)
        .with_context(|| format!("could not calculate expression '{}'", args.expression))?;
    info!("{} = {}", args.expression, result);

    println!("{}", result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_is_parsed_into_variable_and_value() {
        let (variable, value) = parse_assignment("a=-12").unwrap();
        assert_eq!(variable, Variable::new("a").unwrap());
        assert_eq!(value, -12);
    }

    #[test]
    fn assignment_tolerates_spaces() {
        let (variable, value) = parse_assignment(" z = 7 ").unwrap();
        assert_eq!(variable.name(), 'z');
        assert_eq!(value, 7);
    }

    #[test]
    fn assignment_without_equals_sign_is_rejected() {
        assert!(parse_assignment("a").is_err());
    }

    #[test]
    fn assignment_with_invalid_name_is_rejected() {
        assert!(parse_assignment("ab=1").is_err());
        assert!(parse_assignment("A=1").is_err());
    }

    #[test]
    fn assignment_with_invalid_value_is_rejected() {
        assert!(parse_assignment("a=x").is_err());
    }

    #[test]
    fn arguments_are_parsed() {
        let args = Arguments::parse_from([
            "expression-interpreter-cli",
            "a * 2",
            "-s",
            "a=4",
            "--tree",
        ]);

        assert_eq!(args.expression, "a * 2");
        assert_eq!(args.assignments, vec![(Variable::new("a").unwrap(), 4)]);
        assert!(args.tree);
        assert!(!args.infix);
    }
}
