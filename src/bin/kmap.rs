//! K-map Logic Minimizer - Command Line Interface

use clap::{Parser, ValueEnum};
use kmap_logic::{
    run, HdlWriter, KmapError, KmapLayout, Minimization, MinimizerConfig, Notation, Testbench,
    TruthTable, VerilogModule,
};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Essential primes plus greedy covering (default)
    Minimize,
    /// Exact covering search
    Exact,
    /// Print the Karnaugh map of the input
    Map,
    /// Minimize and check every rendering against the table
    Verify,
    /// Echo the table without modification
    Echo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputType {
    /// Sum of products
    Sop,
    /// Product of sums
    Pos,
    /// C-like sum of products
    Code,
    /// Verilog module
    Verilog,
    /// Verilog testbench
    Testbench,
    /// Every form above
    All,
}

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Quine-McCluskey truth table minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Input truth table file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Operation to perform
    #[arg(short = 'D', long = "do", value_enum, default_value = "minimize")]
    command: Command,

    /// Output form
    #[arg(short = 'o', long = "output", value_enum, default_value = "sop")]
    output: OutputType,

    /// Print a summary of the run to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Write all artifacts of the run into this directory
    #[arg(short = 'O', long = "out-dir", value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_output(result: &Minimization, output: OutputType) {
    let pos = || {
        result
            .pos()
            .unwrap_or_else(|| "(product of sums not derived)".to_string())
    };
    match output {
        OutputType::Sop => println!("{}", result.sop()),
        OutputType::Pos => println!("{}", pos()),
        OutputType::Code => println!("{}", result.sop_with(&Notation::CODE)),
        OutputType::Verilog => {
            print!("{}", VerilogModule::from_minimization(result).to_hdl_string())
        }
        OutputType::Testbench => print!("{}", Testbench::from_minimization(result).to_hdl_string()),
        OutputType::All => {
            println!("SOP:  {}", result.sop());
            println!("POS:  {}", pos());
            println!("Code: {}", result.sop_code());
            println!();
            print!("{}", VerilogModule::from_minimization(result).to_hdl_string());
            println!();
            print!("{}", Testbench::from_minimization(result).to_hdl_string());
        }
    }
}

fn print_summary(result: &Minimization) {
    let table = result.table();
    eprintln!(
        "Input: {} variables, {} minterms, {} don't-cares, {} zeros",
        table.num_vars(),
        table.minterms().len(),
        table.dont_cares().len(),
        table.zeros().len()
    );
    eprintln!("Prime implicants: {}", result.primes().len());
    for prime in result.primes() {
        eprintln!("  {}", prime);
    }
    let literals: usize = result.sop_cover().iter().map(|i| i.literal_count()).sum();
    eprintln!(
        "SOP cover: {} terms, {} literals",
        result.sop_cover().len(),
        literals
    );
    if let Some(cover) = result.pos_cover() {
        eprintln!("POS cover: {} clauses", cover.len());
    }
}

fn execute(args: &Args) -> Result<(), KmapError> {
    let table = TruthTable::from_file(&args.input)?;
    info!(
        "read {} variables from {}",
        table.num_vars(),
        args.input.display()
    );

    let config = match args.command {
        Command::Exact => MinimizerConfig::exact(),
        _ => MinimizerConfig::default(),
    };

    match args.command {
        Command::Echo => {
            print!("{}", table.to_text());
            return Ok(());
        }
        Command::Map => {
            print!("{}", KmapLayout::new(table.num_vars()).render(&table));
            return Ok(());
        }
        Command::Minimize | Command::Exact | Command::Verify => {}
    }

    let result = Minimization::new(&table, &config)?;

    if args.command == Command::Verify {
        run::verify(&result)?;
        if args.summary {
            eprintln!("All renderings agree with the table");
        }
    }

    if args.summary {
        print_summary(&result);
    }

    print_output(&result, args.output);

    if let Some(dir) = &args.out_dir {
        let written = run::write_artifacts(&result, dir)?;
        if args.summary {
            for path in written {
                eprintln!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    if let Err(e) = execute(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
