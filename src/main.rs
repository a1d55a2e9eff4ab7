use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pure_table::app;
use pure_table::excel;
use pure_table::json_export;
use pure_table::style::format_cell;
use pure_table::table::{Axis, Lookup, Table};
use pure_table::ui;
use pure_table::xlsx_export;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spreadsheet (xlsx, xlsm, xlsb, xls, ods) or JSON grid file
    #[arg(required = true)]
    file_path: PathBuf,

    /// Worksheet name (defaults to the first sheet)
    #[arg(long, short = 's')]
    sheet: Option<String>,

    /// Number of leading columns holding row headers
    #[arg(long, short = 'r', default_value = "1")]
    row_headers: usize,

    /// Number of leading rows holding column headers
    #[arg(long, short = 'c', default_value = "1")]
    column_headers: usize,

    /// Add positional labels (1, 2, ... and A, B, ...) to the rendering and accept them in lookups
    #[arg(long, short = 'p')]
    pure: bool,

    /// Look up one cell and print it; comma-separated values must all match
    #[arg(long, short = 'l', num_args = 2, value_names = ["ROW", "COLUMN"])]
    lookup: Option<Vec<String>>,

    /// Print the table as JSON to stdout: 'grid' (rendered grid) or 'records'
    #[arg(long, short = 'j')]
    json: Option<String>,

    /// Write the JSON output to a file instead of stdout (implies --json grid)
    #[arg(long, value_name = "PATH")]
    json_out: Option<PathBuf>,

    /// Print the worksheet names of the file and exit
    #[arg(long)]
    list_sheets: bool,

    /// Write the rendered table to a styled xlsx workbook
    #[arg(long, short = 'x')]
    xlsx: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_level);

    if cli.list_sheets {
        for name in excel::sheet_names(&cli.file_path)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let batch =
        cli.lookup.is_some() || cli.json.is_some() || cli.json_out.is_some() || cli.xlsx.is_some();
    if !std::io::stdout().is_terminal() && !batch {
        eprintln!(
            "pure-table error: Pipe detected but no --lookup, --json, --json-out or --xlsx flag provided."
        );
        std::process::exit(1);
    }

    let grid = excel::load_grid(&cli.file_path, cli.sheet.as_deref())?;
    let table = Table::new(grid, cli.row_headers, cli.column_headers, cli.pure)
        .with_context(|| format!("Invalid table layout in {}", cli.file_path.display()))?;

    if let Some(path) = &cli.xlsx {
        let sheet_name = cli.sheet.as_deref().unwrap_or("Table");
        xlsx_export::export_styled_xlsx(table.render(), table.header_extent(), sheet_name, path)?;
        eprintln!("Wrote {}", path.display());
    }

    if cli.json.is_some() || cli.json_out.is_some() {
        let format_name = cli.json.as_deref().unwrap_or("grid");
        let format = match json_export::ExportFormat::from_str(format_name) {
            Ok(format) => format,
            Err(_) => anyhow::bail!("Invalid JSON format: {}", format_name),
        };

        let value = match format {
            json_export::ExportFormat::Grid => json_export::grid_to_json(table.render()),
            json_export::ExportFormat::Records => {
                serde_json::to_value(json_export::records(&table))?
            }
        };

        match &cli.json_out {
            Some(path) => {
                json_export::write_json_to_file(&value, path)?;
                eprintln!("Wrote {}", path.display());
            }
            None => println!("{}", json_export::serialize_to_json(&value)?),
        }
    }

    if let Some(selectors) = &cli.lookup {
        let row = table.parse_selector(Axis::Row, &selectors[0]);
        let column = table.parse_selector(Axis::Column, &selectors[1]);

        match table.find(&row, &column) {
            Lookup::Found { value, .. } => println!("{}", format_cell(value)),
            Lookup::NotFound { row, column } => {
                let axis = match (row, column) {
                    (None, None) => "row and column",
                    (None, Some(_)) => "row",
                    _ => "column",
                };
                anyhow::bail!("No {} matches {} ; {}", axis, selectors[0], selectors[1]);
            }
        }
    }

    if batch {
        return Ok(());
    }

    let app_state = app::AppState::new(table, cli.file_path);
    ui::run_app(app_state)?;

    Ok(())
}
