use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use maflib::record::COLUMN_SEPARATOR;
use maflib::{EnforceSortOrder, MafRecord, SortOrder, SortOrderConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Lines starting with this are file header lines.
const HEADER_PREFIX: char = '#';

#[derive(Parser, Debug)]
#[command(name = "mafsort", about = "Check and sort mutation annotation files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the known sort orders.
    Orders,
    /// Verify that the records of a file are in the declared order.
    Check {
        /// Tab-delimited annotation file.
        input: PathBuf,
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Sort the records of a file.
    Sort {
        /// Tab-delimited annotation file.
        input: PathBuf,
        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        order: OrderArgs,
    },
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Sort order name.
    #[arg(long, default_value = "Coordinate")]
    sort_order: String,
    /// FASTA index (.fai) ranking the contigs.
    #[arg(long, conflicts_with = "contigs")]
    fasta_index: Option<PathBuf>,
    /// Comma-separated contig names in rank order.
    #[arg(long, value_delimiter = ',')]
    contigs: Option<Vec<String>>,
}

impl OrderArgs {
    fn build(&self) -> Result<SortOrder> {
        let config = SortOrderConfig {
            sort_order: self.sort_order.clone(),
            fasta_index: self.fasta_index.clone(),
            contigs: self.contigs.clone(),
        };
        config
            .build()
            .with_context(|| format!("failed to configure sort order {}", self.sort_order))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Orders => {
            for name in SortOrder::names() {
                println!("{name}");
            }
        }
        Commands::Check { input, order } => run_check(&input, &order.build()?)?,
        Commands::Sort {
            input,
            output,
            order,
        } => run_sort(&input, output.as_deref(), &order.build()?)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_check(input: &Path, order: &SortOrder) -> Result<()> {
    let mut reader = AnnotationReader::open(input)?;
    if !order.supports_sort_key() {
        info!(sort_order = %order, "sort order defines no key; records are not compared");
    }

    let mut read_error = None;
    let records = reader
        .by_ref()
        .map_while(|record| record.map_err(|err| read_error = Some(err)).ok());

    let mut checked = 0u64;
    for result in records.enforce_sort_order(order) {
        result.with_context(|| {
            format!(
                "{} is not in {order} order after {checked} records",
                input.display()
            )
        })?;
        checked += 1;
    }
    if let Some(err) = read_error {
        return Err(err);
    }

    info!(records = checked, sort_order = %order, "records are in order");
    Ok(())
}

fn run_sort(input: &Path, output: Option<&Path>, order: &SortOrder) -> Result<()> {
    let mut reader = AnnotationReader::open(input)?;
    let records = reader.by_ref().collect::<Result<Vec<_>>>()?;
    let count = records.len();
    let records = order
        .sort(records)
        .with_context(|| format!("failed to sort {}", input.display()))?;

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);
    for line in &reader.header {
        writeln!(writer, "{line}")?;
    }
    let separator = COLUMN_SEPARATOR.to_string();
    writeln!(writer, "{}", reader.columns.join(separator.as_str()))?;
    for record in &records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()?;

    info!(records = count, sort_order = %order, "sorted records");
    Ok(())
}

/// Streams the data rows of a tab-delimited annotation file.
///
/// Leading `#` lines are kept as header lines; the next line names the
/// columns. Blank lines are skipped.
struct AnnotationReader {
    header: Vec<String>,
    columns: Arc<[String]>,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl AnnotationReader {
    fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open annotation file {}", path.display()))?;
        let mut lines = BufReader::new(file).lines();
        let mut header = Vec::new();
        let mut line_number = 0;

        let columns = loop {
            line_number += 1;
            let line = lines
                .next()
                .ok_or_else(|| anyhow!("{} has no column header line", path.display()))??;
            if line.starts_with(HEADER_PREFIX) {
                header.push(line);
            } else {
                break line
                    .split(COLUMN_SEPARATOR)
                    .map(str::to_string)
                    .collect::<Arc<[String]>>();
            }
        };
        debug!(
            path = %path.display(),
            header_lines = header.len(),
            columns = columns.len(),
            "opened annotation file"
        );

        Ok(Self {
            header,
            columns,
            lines,
            line_number,
        })
    }
}

impl Iterator for AnnotationReader {
    type Item = Result<MafRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_number += 1;
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            if line.trim().is_empty() {
                continue;
            }
            let line_number = self.line_number;
            return Some(
                MafRecord::from_line(Arc::clone(&self.columns), &line)
                    .with_context(|| format!("invalid record on line {line_number}")),
            );
        }
    }
}
