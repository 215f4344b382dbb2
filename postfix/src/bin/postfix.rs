use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Evaluate integer postfix expressions like `2 6 + 2 * 2 /`.
/// Without an expression an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the sample evaluations and exit.
    #[arg(long, conflicts_with = "expression")]
    demo: bool,

    /// History file for the interactive prompt (default ~/.postfix_history).
    #[arg(long)]
    history: Option<PathBuf>,

    #[arg(long, default_value = ">> ")]
    prompt: String,

    /// Expression tokens, joined with spaces.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

mod repl {
    use std::path::Path;

    pub fn evalexpr(input: &str) -> bool {
        match postfix::evaluate(input) {
            Err(e) => {
                println!("Error evaluating expression: {}", e);
                false
            }
            Ok(result) => {
                println!("{} = {}", input.trim(), result);
                true
            }
        }
    }

    pub fn demo() {
        let samples = ["8 2 /", "2 6 + 2 * 2 /", "1 2 + $ 9 22 * / -"];
        for sample in samples.iter() {
            match postfix::evaluate(sample) {
                Err(e) => println!("Error evaluating expression: {}", e),
                Ok(result) => println!("Result: {}", result),
            }
        }
    }

    pub fn interactive(histpath: Option<&Path>, prompt: &str) -> rustyline::Result<()> {
        let mut rl = rustyline::DefaultEditor::new()?;
        if let Some(path) = histpath {
            if rl.load_history(path).is_err() {
                log::debug!("no history at {}", path.display());
            }
        }
        while let Ok(input) = rl.readline(prompt) {
            if input.trim().is_empty() {
                continue;
            }
            rl.add_history_entry(input.as_str())?;
            match postfix::evaluate(&input) {
                Err(e) => println!("Error evaluating expression: {}", e),
                Ok(result) => println!("{}", result),
            }
        }
        if let Some(path) = histpath {
            rl.save_history(path)?;
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.demo {
        repl::demo();
        return ExitCode::SUCCESS;
    }
    if !args.expression.is_empty() {
        let input = args.expression.join(" ");
        return if repl::evalexpr(&input) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let histpath = args
        .history
        .or_else(|| dirs::home_dir().map(|h| h.join(".postfix_history")));
    match repl::interactive(histpath.as_deref(), &args.prompt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
