//! Quadc - replay a command script and print the symbol table and
//! intermediate code
//!
//! Usage: quadc [OPTIONS] <input> [-o <output>]

use anyhow::Context;
use clap::{ArgGroup, Parser as ClapParser};
use quadc::{
    CapacityPolicy, Compilation, CompilationConfig, CompileError, DiagnosticReporter, Driver,
    DriverConfig, DEFAULT_CAPACITY,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "quadc")]
#[command(version)]
#[command(about = "Symbol table and three-address code back-end driver", long_about = None)]
#[command(group(ArgGroup::new("section").args(["symbols_only", "code_only"])))]
struct Args {
    /// Command script to replay
    #[arg(required = true)]
    input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of instructions
    #[arg(long, default_value_t = DEFAULT_CAPACITY, conflicts_with = "unbounded")]
    capacity: usize,

    /// Let the instruction store grow without limit
    #[arg(long)]
    unbounded: bool,

    /// Only print the symbol table
    #[arg(long)]
    symbols_only: bool,

    /// Only print the intermediate code
    #[arg(long)]
    code_only: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let capacity = if args.unbounded {
        CapacityPolicy::Unbounded
    } else {
        CapacityPolicy::Bounded(args.capacity)
    };
    let mut unit = Compilation::with_config(CompilationConfig { capacity });

    if args.verbose {
        let limit = match capacity {
            CapacityPolicy::Bounded(n) => n.to_string(),
            CapacityPolicy::Unbounded => "unbounded".to_string(),
        };
        eprintln!("Replaying {} (instruction limit: {})", filename, limit);
    }

    let driver = Driver::new(DriverConfig {
        dump_tokens: args.dump_tokens,
        verbose: args.verbose,
    });

    let lines = replay(&driver, &source, &mut unit, &reporter, file_id)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }

    let report = if args.symbols_only {
        unit.symbols().to_string()
    } else if args.code_only {
        unit.code().to_string()
    } else {
        unit.to_string()
    };

    match &args.output {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("cannot write {}", path.display()))?;
            if args.verbose {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => {
            if !lines.is_empty() {
                writeln!(out)?;
            }
            write!(out, "{report}")?;
        }
    }

    if args.verbose {
        eprintln!(
            "{} symbols, {} instructions",
            unit.symbols().len(),
            unit.code().len()
        );
    }

    Ok(())
}

/// Run the script; script errors are rendered with source labels, the rest
/// are left for `main` to print
fn replay(
    driver: &Driver,
    source: &str,
    unit: &mut Compilation,
    reporter: &DiagnosticReporter,
    file_id: usize,
) -> anyhow::Result<Vec<String>> {
    match driver.run(source, unit) {
        Ok(lines) => Ok(lines),
        Err(e @ CompileError::Script { .. }) => {
            reporter.report_error(file_id, &e);
            anyhow::bail!("invalid command script")
        }
        Err(e) => Err(e.into()),
    }
}
