use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use echelon_trace::{
    fraction_format::DEFAULT_MAX_DENOMINATOR, matrix_input::parse_matrix, render::render_steps,
    steps::RowOperationKind, EchelonReduction, FractionFormatter, Reduction, StepList,
};
use env_logger::Env;
use strum::IntoEnumIterator;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// only the entered matrix
    Show,
    /// forward elimination to row echelon form
    Ref,
    /// forward elimination and back substitution
    Rref,
}

impl Mode {
    fn reduction(self) -> Option<Reduction> {
        match self {
            Self::Show => None,
            Self::Ref => Some(Reduction::RowEchelon),
            Self::Rref => Some(Reduction::ReducedRowEchelon),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// rows separated by ';' or new lines, read from stdin when absent
    #[arg(short, long)]
    pub matrix: Option<String>,
    #[arg(long, value_enum, default_value_t = Mode::Rref)]
    pub mode: Mode,
    #[arg(long, default_value_t = DEFAULT_MAX_DENOMINATOR)]
    pub max_denominator: u32,
}

fn read_matrix_text(args: &Args) -> Result<String> {
    match &args.matrix {
        Some(text) => Ok(text.clone()),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading matrix from stdin")?;
            Ok(text)
        }
    }
}

fn trace(args: &Args) -> Result<StepList> {
    let m = parse_matrix(&read_matrix_text(args)?).context("parsing matrix")?;
    log::debug!("{}x{} input matrix", m.number_of_rows, m.number_of_columns);
    let steps = match args.mode.reduction() {
        None => {
            let mut steps = StepList::new();
            steps.record_matrix_step(&m);
            steps
        }
        Some(reduction) => {
            let mut elimination = EchelonReduction::new(&m);
            elimination.run(reduction);
            elimination.into_steps()
        }
    };
    log::info!("{} steps recorded", steps.len());
    for kind in RowOperationKind::iter() {
        log::info!("{kind}: {}", steps.count_of(kind));
    }
    Ok(steps)
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    match trace(&args) {
        Ok(steps) => println!(
            "{}",
            render_steps(&steps, &FractionFormatter::new(args.max_denominator))
        ),
        Err(err) => {
            eprintln!("could not trace elimination: {err:?}");
            process::exit(1)
        }
    }
}
