//! mdtab CLI - Generate Markdown tables from CSV

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use mdtab::{generate_md_table, preview_table, read_csv, write_output, AlignSpec, RenderResult};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mdt")]
#[command(version)]
#[command(about = "Generate Markdown tables from CSV, with a terminal preview", long_about = None)]
struct Cli {
    /// Input CSV file path, or `-` for stdin
    #[arg(short, long)]
    input: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Comma-separated column alignments: left, center, right
    #[arg(short, long)]
    align: Option<String>,

    /// Render a box-drawn terminal preview instead of Markdown
    #[arg(short, long)]
    preview: bool,
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> RenderResult<()> {
    let table = read_csv(&cli.input)?;
    let alignments = cli.align.clone().map(AlignSpec::from);

    if cli.preview {
        // Preview always goes to stdout, even when --output is given
        let rendered = preview_table(&table, alignments.as_ref())?;
        write_output(None, &rendered)?;
    } else {
        let rendered = generate_md_table(&table, alignments.as_ref())?;
        write_output(cli.output.as_deref(), &rendered)?;
        if let Some(path) = &cli.output {
            eprintln!("✓ Output written to: {}", path);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    std::process::exit(1);
}
