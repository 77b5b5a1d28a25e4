use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use id3tree::prelude::*;
use id3tree::render;

use std::path::PathBuf;


const DEFAULT_PATH: &str = "data.csv";


/// Grow an ID3 decision tree from a categorical CSV file
/// and print it to standard output.
#[derive(Parser, Debug)]
#[command(name = "id3tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file whose first line is the header and whose last column is the label
    #[arg(default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}


#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Nested JSON object
    Json,
    /// Graphviz dot
    Dot,
}


fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}


fn run(cli: &Cli) -> id3tree::Result<()> {
    let table = TableReader::new()
        .file(&cli.path)
        .read()?;

    let id3 = TreeBuilder::new(&table).build()?;
    tracing::info!("\n{id3}");

    let rendered = match cli.format {
        Format::Json if cli.plain => render::to_json(id3.tree())?,
        Format::Json => render::to_colored_json(id3.tree()),
        Format::Dot => render::to_dot(id3.tree()),
    };
    println!("{rendered}");
    Ok(())
}


fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
