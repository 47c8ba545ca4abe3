use astdot::{
    codegen::{CppGenerator, SymbolSet},
    read, samples, AstResult, Program,
};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render syntax trees as Graphviz DOT and wrap programs into C++",
    long_about = "Render syntax trees as Graphviz DOT and wrap programs into C++.\n\
                 \n\
                 Example usage:\n\
                 astdot demo                          # Print the DOT of the sample tree\n\
                 astdot demo --nested -o tree.dot     # Nested sample, written to a file\n\
                 astdot demo --check --stats          # Validate ids and show tree metrics\n\
                 astdot generate body.txt -s a -s b   # Wrap a program body into C++"
)]
struct Cli {
    // Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serialize one of the built-in sample trees
    Demo {
        // Use the nested sample with conditionals
        #[arg(long)]
        nested: bool,

        // Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        // Check that node ids are unique DOT identifiers before writing
        #[arg(long)]
        check: bool,

        // Show tree metrics
        #[arg(long)]
        stats: bool,
    },
    /// Wrap a program body into a C++ main function
    Generate {
        // The path to the program body
        path: PathBuf,

        // Symbols to declare and print, may be repeated
        #[arg(short, long = "symbol")]
        symbols: Vec<String>,

        // Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn emit(text: &str, output: &Option<PathBuf>) -> AstResult<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("output written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn demo(nested: bool, output: &Option<PathBuf>, check: bool, stats: bool) -> AstResult<()> {
    let start = Instant::now();
    let program: Program = if nested {
        samples::nested_program()?
    } else {
        samples::assignment_program()?
    };

    if check {
        program.check_identifiers()?;
        info!("node identifiers are unique");
    }

    let dot = program.serialize()?;
    info!("serialized in {:.3}s", start.elapsed().as_secs_f64());
    emit(&dot, output)?;

    if stats {
        let stats = program.stats()?;
        eprintln!("\n Tree Metrics:");
        eprintln!("  • Nodes:   {}", stats.nodes);
        eprintln!("  • Leaves:  {}", stats.leaves);
        eprintln!("  • Edges:   {}", stats.edges);
        eprintln!("  • Depth:   {}", stats.depth);
    }
    Ok(())
}

fn generate(path: &PathBuf, symbols: &[String], output: &Option<PathBuf>) -> AstResult<()> {
    let body = read(path)?;
    info!("read {} bytes from {}", body.len(), path.display());

    let symbols = SymbolSet::from_names(symbols.iter().cloned())?;
    let mut generator = CppGenerator::new(symbols);
    generator.generate_code(body.trim_end_matches('\n'))?;
    emit(generator.get_output(), output)
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let result = match &args.command {
        Command::Demo {
            nested,
            output,
            check,
            stats,
        } => demo(*nested, output, *check, *stats),
        Command::Generate {
            path,
            symbols,
            output,
        } => generate(path, symbols, output),
    };

    if let Err(e) = result {
        fatal(&e.to_string());
    }
}
