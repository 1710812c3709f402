use analytics::{AnalysisOptions, SellerReport, analyze_sales_data};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use configuration::load_config;
use dataset::load_dataset;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the sales report application.
fn main() {
    // A missing .env file is fine; it only supplies optional overrides.
    dotenvy::dotenv().ok();
    init_tracing();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so that stdout carries nothing but the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to install the tracing subscriber");
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Seller performance report: revenue, profit, top products and bonuses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the seller report from a sales dataset.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// A JSON file with the whole dataset, or a directory holding
    /// customers.json, products.json, sellers.json and purchase_records.json.
    #[arg(long)]
    data: PathBuf,

    /// Configuration file. Defaults to ./config.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to print the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also write the report as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only count receipts dated on or after this day (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Only count receipts dated on or before this day (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Loads configuration and data, runs the analysis and prints the report.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let options = AnalysisOptions::from_config(&config)
        .context("Failed to build analysis strategies")?;

    let mut data = load_dataset(&args.data)
        .with_context(|| format!("Failed to load sales data from {}", args.data.display()))?;

    if args.from.is_some() || args.to.is_some() {
        data = data.within_period(args.from, args.to)?;
        tracing::info!(
            from = ?args.from,
            to = ?args.to,
            purchase_records = data.purchase_records.len(),
            "Purchase records restricted to period."
        );
    }

    let report = analyze_sales_data(&data, &options).context("Analysis failed")?;
    tracing::info!(sellers = report.len(), "Seller report ready.");

    match args.format {
        OutputFormat::Table => println!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    if let Some(path) = args.output {
        fs::write(&path, render_json(&report)?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written.");
    }

    Ok(())
}

fn render_json(report: &[SellerReport]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn render_table(report: &[SellerReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Rank",
        "Seller",
        "Name",
        "Revenue",
        "Profit",
        "Sales",
        "Bonus",
        "Top products",
    ]);

    for (rank, row) in report.iter().enumerate() {
        let top_products = row
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&row.seller_id),
            Cell::new(&row.name),
            Cell::new(format!("{:.2}", row.revenue)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.profit)).set_alignment(CellAlignment::Right),
            Cell::new(row.sales_count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.bonus)).set_alignment(CellAlignment::Right),
            Cell::new(top_products),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::TopProduct;
    use rust_decimal_macros::dec;

    fn sample_report() -> Vec<SellerReport> {
        vec![SellerReport {
            seller_id: "seller_1".to_string(),
            name: "Alexey Petrov".to_string(),
            revenue: dec!(180),
            profit: dec!(80.5),
            sales_count: 1,
            top_products: vec![
                TopProduct {
                    sku: "SKU_001".to_string(),
                    quantity: 2,
                },
                TopProduct {
                    sku: "SKU_002".to_string(),
                    quantity: 1,
                },
            ],
            bonus: dec!(12.08),
        }]
    }

    #[test]
    fn test_table_shows_money_with_two_decimals() {
        let rendered = render_table(&sample_report()).to_string();
        assert!(rendered.contains("Alexey Petrov"));
        assert!(rendered.contains("180.00"));
        assert!(rendered.contains("80.50"));
        assert!(rendered.contains("12.08"));
        assert!(rendered.contains("SKU_001 x2, SKU_002 x1"));
    }

    #[test]
    fn test_json_keeps_report_fields() {
        let json = render_json(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let row = &parsed[0];
        assert_eq!(row["seller_id"], "seller_1");
        assert_eq!(row["profit"], 80.5);
        assert_eq!(row["sales_count"], 1);
        assert_eq!(row["top_products"][1]["quantity"], 1);
    }

    #[test]
    fn test_cli_parses_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "sales-report",
            "analyze",
            "--data",
            "data/",
            "--format",
            "json",
            "--from",
            "2023-12-01",
        ])
        .unwrap();

        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.data, PathBuf::from("data/"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2023, 12, 1));
        assert_eq!(args.to, None);
    }
}
