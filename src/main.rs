use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tapcalc::application::engine::{ERROR_TOKEN, ExpressionEngine};
use tapcalc::domain::expression::Expression;
use tapcalc::domain::operand;
use tapcalc::interfaces::csv::screen_writer::{ScreenRecord, ScreenWriter};
use tapcalc::interfaces::csv::tap_reader::TapReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a CSV file of keypad taps and print the resulting screen
    Replay {
        /// Input CSV with a `key` column, or `-` for stdin
        input: PathBuf,

        /// Print the screen after every tap instead of only the final one
        #[arg(long)]
        trace: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Evaluate an expression strictly left to right
    Eval {
        /// e.g. "2+3×4" (ASCII `*`, `/` and `-` are accepted)
        expression: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            input,
            trace,
            format,
        } => {
            let source: Box<dyn Read> = if input.as_os_str() == "-" {
                Box::new(io::stdin())
            } else {
                Box::new(File::open(input).into_diagnostic()?)
            };
            replay(source, trace, format)
        }
        Command::Eval { expression } => eval(&expression),
    }
}

fn replay(source: Box<dyn Read>, trace: bool, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = match format {
        OutputFormat::Csv => ScreenWriter::csv(stdout.lock()),
        OutputFormat::Json => ScreenWriter::json(stdout.lock()),
    };

    let mut engine = ExpressionEngine::new();
    let mut step = 0;
    let mut last_key = None;
    for tap in TapReader::new(source).taps() {
        match tap {
            Ok(key) => {
                engine.apply_event(key);
                step += 1;
                last_key = Some(key);
                if trace {
                    let record = ScreenRecord::new(step, last_key, &engine.screen());
                    writer.write_record(&record).into_diagnostic()?;
                }
            }
            Err(e) => {
                eprintln!("Error reading tap: {}", e);
            }
        }
    }

    if !trace {
        let record = ScreenRecord::new(step, last_key, &engine.screen());
        writer.write_record(&record).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

fn eval(text: &str) -> Result<()> {
    let expression: Expression = text.parse().into_diagnostic()?;
    match expression.evaluate() {
        Ok(value) => println!("{}", operand::format_value(value)),
        Err(e) => {
            eprintln!("Evaluation failed: {}", e);
            println!("{}", ERROR_TOKEN);
        }
    }
    Ok(())
}
