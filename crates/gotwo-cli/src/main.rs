use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use gotwo::{Label, Machine, MachineOptions, Outcome, StdConsole};

#[derive(Parser)]
#[command(name = "gotwo")]
#[command(about = "Register machine with a trampoline dispatch loop")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Boot the demonstration program: read n, exit with the nth Fibonacci number.
    Run {
        #[arg(long, help = "Abort after this many label bodies")]
        max_steps: Option<u64>,
    },
    /// Invoke a single procedure and report its result registers.
    Call {
        #[arg(value_enum)]
        procedure: Procedure,

        #[arg(help = "Words loaded into A0, A1, ...", allow_negative_numbers = true)]
        words: Vec<i64>,

        #[arg(
            short,
            long,
            conflicts_with = "words",
            help = "Load these bytes into A0, A1, ... instead (for atoi and print)"
        )]
        text: Option<String>,

        #[arg(long, help = "Abort after this many label bodies")]
        max_steps: Option<u64>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Procedure {
    Mul,
    Power,
    Fib,
    Atoi,
    Divmod,
    Print,
    Scan,
}

impl Procedure {
    const fn label(self) -> Label {
        match self {
            Self::Mul => Label::Mul,
            Self::Power => Label::Power,
            Self::Fib => Label::Fib,
            Self::Atoi => Label::Atoi,
            Self::Divmod => Label::DivMod,
            Self::Print => Label::Print,
            Self::Scan => Label::Scan,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { max_steps } => {
            let mut machine = Machine::with_options(
                StdConsole::new(),
                MachineOptions {
                    step_limit: max_steps,
                },
            );
            let outcome = machine.boot().context("Machine faulted")?;
            std::process::exit(exit_code(outcome));
        }
        Commands::Call {
            procedure,
            words,
            text,
            max_steps,
            json,
        } => {
            let label = procedure.label();
            let mut machine = Machine::with_options(
                StdConsole::new(),
                MachineOptions {
                    step_limit: max_steps,
                },
            );

            if let Some(text) = text {
                machine
                    .registers_mut()
                    .load_arg_bytes(text.as_bytes())
                    .with_context(|| format!("--text '{text}' does not fit in the registers"))?;
            } else {
                machine
                    .registers_mut()
                    .load_args(&words)
                    .with_context(|| format!("{} words do not fit in the registers", words.len()))?;
            }

            let outcome = machine
                .invoke(label)
                .with_context(|| format!("{label} faulted"))?;
            report(&machine, label, outcome, json);
        }
    }

    Ok(())
}

fn exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Exited(code) => code,
        Outcome::Returned => 0,
    }
}

fn report(machine: &Machine<StdConsole>, label: Label, outcome: Outcome, json: bool) {
    let returns = machine.registers().returns();
    let stack = machine.return_stack();

    if json {
        let value = serde_json::json!({
            "procedure": label.name(),
            "returns": returns,
            "exit_code": match outcome {
                Outcome::Exited(code) => Some(code),
                Outcome::Returned => None,
            },
            "steps": machine.steps(),
            "max_depth": stack.max_depth(),
            "depth": stack.depth(),
        });
        println!("{value}");
        return;
    }

    // PRINT shares stdout with the report; start on a fresh line.
    if matches!(label, Label::Print) {
        println!();
    }
    for (index, word) in returns.iter().enumerate() {
        println!("R{index:<2} = {word}");
    }
    println!(
        "{label}: {} steps, max depth {}, final depth {}",
        machine.steps(),
        stack.max_depth(),
        stack.depth()
    );
}
