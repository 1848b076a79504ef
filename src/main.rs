use analyzer::{
    Dashboard, DashboardQuery, DashboardSnapshot, FilterPredicate, IndexDetail, IndexView,
    QuadrantsView, StatisticsView, TableRow,
};
use anyhow::Context;
use api_client::{HttpDashboardClient, LiveDashboard, Outcome};
use clap::{Args, Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::QuadrantBaseline;
use core_types::{CategoryFilter, Quadrant, SortKey};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// The main entry point for the IndexScope dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => configuration::load_config_from(path),
        None => configuration::load_config(),
    }
    .context("Failed to load configuration")?;
    let _guard = configuration::init_logging(&settings.logging)?;

    if let Some(baseline) = cli.baseline {
        settings.analytics.quadrant_baseline = baseline;
    }

    match cli.command {
        Commands::Serve(args) => {
            if let Some(host) = args.host {
                settings.server.host = host;
            }
            if let Some(port) = args.port {
                settings.server.port = port;
            }
            web_server::run_server(settings).await
        }
        Commands::Dashboard(args) if args.remote.is_some() => {
            handle_remote_dashboard(args, cli.json).await
        }
        command => {
            let dataset = dataset::load(settings.dataset.path.as_deref())?;
            let dashboard = Dashboard::new(dataset, &settings);
            handle_local(command, &dashboard, cli.json)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Explore the risk/return profile of a universe of market indices.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to read instead of `$INDEXSCOPE_CONFIG` / `config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Which set the quadrant averages are taken over.
    #[arg(long, global = true, value_enum)]
    baseline: Option<QuadrantBaseline>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Aggregate statistics of the filtered set.
    Stats(FilterArgs),
    /// The filtered set split into risk/return quadrants.
    Quadrants(FilterArgs),
    /// The best indices by a metric over the whole dataset.
    Top(TopArgs),
    /// Statistics, quadrant counts and the ranked table in one view.
    Dashboard(DashboardArgs),
    /// One index with its rank.
    Show {
        name: String,
    },
    /// Several indices side by side.
    Compare {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// The categories present in the dataset.
    Categories,
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Clone)]
struct FilterArgs {
    /// Case-insensitive substring of the index name.
    #[arg(long, default_value = "")]
    search: String,

    /// `all` or a category name.
    #[arg(long, default_value = "all")]
    category: CategoryFilter,

    /// Keep indices with risk at or below this value.
    #[arg(long)]
    max_risk: Option<f64>,

    /// Keep indices with returns at or above this value.
    #[arg(long)]
    min_return: Option<f64>,
}

impl FilterArgs {
    fn predicate(&self) -> FilterPredicate {
        let mut predicate = FilterPredicate::all()
            .with_search(self.search.clone())
            .with_category(self.category);
        if let Some(max_risk) = self.max_risk {
            predicate = predicate.with_max_risk(max_risk);
        }
        if let Some(min_return) = self.min_return {
            predicate = predicate.with_min_return(min_return);
        }
        predicate
    }
}

#[derive(Args)]
struct TopArgs {
    #[arg(long, value_enum, default_value_t = SortKey::Returns)]
    metric: SortKey,
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args)]
struct DashboardArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// The ranking tab.
    #[arg(long, value_enum, default_value_t = SortKey::Returns)]
    sort: SortKey,

    /// Ask a running server (e.g. `http://localhost:5002`) instead of the local dataset.
    #[arg(long)]
    remote: Option<String>,
}

impl DashboardArgs {
    fn query(&self) -> DashboardQuery {
        DashboardQuery {
            filter: self.filter.predicate(),
            sort: self.sort,
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_local(command: Commands, dashboard: &Dashboard, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Stats(args) => {
            let stats = StatisticsView::from(&dashboard.statistics(&args.predicate())?);
            emit(json, &stats, print_statistics)
        }
        Commands::Quadrants(args) => {
            let quadrants = dashboard.quadrants(&args.predicate())?;
            emit(json, &quadrants, print_quadrants)
        }
        Commands::Top(args) => {
            let records = dashboard.top(args.metric, args.limit);
            let rows = TableRow::rows(&records, dashboard.engine());
            emit(json, &rows, |rows| print_rows(rows))
        }
        Commands::Dashboard(args) => {
            let snapshot = dashboard.snapshot(&args.query())?;
            emit(json, &snapshot, print_snapshot)
        }
        Commands::Show { name } => {
            let detail = dashboard.detail(&name)?;
            emit(json, &detail, print_detail)
        }
        Commands::Compare { names } => {
            let records = dashboard.compare(&names)?;
            let views = IndexView::list(&records, dashboard.engine());
            emit(json, &views, |views| print_views(views))
        }
        Commands::Categories => {
            let categories = dashboard.categories();
            emit(json, &categories, |categories| {
                for category in categories {
                    println!("{category}");
                }
            })
        }
        Commands::Serve(_) => anyhow::bail!("serve is not a local query"),
    }
}

async fn handle_remote_dashboard(args: DashboardArgs, json: bool) -> anyhow::Result<()> {
    let Some(url) = args.remote.as_deref() else {
        anyhow::bail!("--remote is required for a remote dashboard");
    };
    let client = HttpDashboardClient::new(url)?;
    let live = LiveDashboard::new(Arc::new(client));

    tracing::info!(server = url, "Fetching dashboard from server.");
    match live.refresh(&args.query()).await? {
        Outcome::Applied(snapshot) => emit(json, &snapshot, print_snapshot),
        Outcome::Superseded { ticket } => {
            anyhow::bail!("request {} was superseded", ticket.value())
        }
    }
}

// ==============================================================================
// Output
// ==============================================================================

fn emit<T: Serialize>(json: bool, value: &T, table: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        table(value);
    }
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

fn fmt_decimal(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_statistics(stats: &StatisticsView) {
    let mut table = new_table(&["Statistic", "Value"]);
    table
        .add_row(vec!["Indices".to_string(), stats.total_indices.to_string()])
        .add_row(vec!["Average return (%)".to_string(), fmt_decimal(stats.avg_return)])
        .add_row(vec!["Average risk (%)".to_string(), fmt_decimal(stats.avg_risk)])
        .add_row(vec!["Max return (%)".to_string(), fmt_decimal(stats.max_return)])
        .add_row(vec!["Min return (%)".to_string(), fmt_decimal(stats.min_return)])
        .add_row(vec!["Max risk (%)".to_string(), fmt_decimal(stats.max_risk)])
        .add_row(vec!["Min risk (%)".to_string(), fmt_decimal(stats.min_risk)])
        .add_row(vec!["Best risk-adjusted return".to_string(), fmt_decimal(stats.best_sharpe)])
        .add_row(vec!["Worst risk-adjusted return".to_string(), fmt_decimal(stats.worst_sharpe)])
        .add_row(vec!["Return/risk correlation".to_string(), fmt_decimal(stats.correlation)]);
    println!("{table}");
}

fn print_quadrants(quadrants: &QuadrantsView) {
    if let Some(averages) = &quadrants.averages {
        println!(
            "Split at average return {}% and average risk {}%",
            averages.avg_return, averages.avg_risk
        );
    }
    let mut table = new_table(&["Quadrant", "Count", "Indices"]);
    for quadrant in Quadrant::ALL {
        let bucket = quadrants.bucket(quadrant);
        let names: Vec<&str> = bucket.iter().map(|view| view.index.as_str()).collect();
        table.add_row(vec![
            quadrant.label().to_string(),
            bucket.len().to_string(),
            names.join(", "),
        ]);
    }
    println!("{table}");
}

fn print_rows(rows: &[TableRow]) {
    let mut table = new_table(&["#", "Index", "Returns (%)", "Risk (%)", "Risk-adj."]);
    for row in rows {
        table.add_row(vec![
            row.rank.to_string(),
            row.index.clone(),
            row.returns.to_string(),
            row.risk.to_string(),
            row.sharpe.to_string(),
        ]);
    }
    println!("{table}");
}

fn print_views(views: &[IndexView]) {
    let mut table = new_table(&["Index", "Category", "Returns (%)", "Risk (%)", "Risk-adj."]);
    for view in views {
        table.add_row(vec![
            view.index.clone(),
            view.category.to_string(),
            view.returns.to_string(),
            view.risk.to_string(),
            view.sharpe.to_string(),
        ]);
    }
    println!("{table}");
}

fn print_detail(detail: &IndexDetail) {
    let quadrant = detail.quadrant.map_or("-", |q| q.label());
    let mut table = new_table(&["Field", "Value"]);
    table
        .add_row(vec!["Index".to_string(), detail.index.clone()])
        .add_row(vec!["Category".to_string(), detail.category.to_string()])
        .add_row(vec!["Returns (%)".to_string(), detail.returns.to_string()])
        .add_row(vec!["Risk (%)".to_string(), detail.risk.to_string()])
        .add_row(vec!["Risk-adjusted return".to_string(), detail.sharpe.to_string()])
        .add_row(vec!["Quadrant".to_string(), quadrant.to_string()])
        .add_row(vec![
            "Rank by returns".to_string(),
            format!("{} of {}", detail.rank, detail.total_indices),
        ]);
    println!("{table}");
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    print_statistics(&snapshot.statistics);

    let mut counts = new_table(&["Quadrant", "Count"]);
    for quadrant in Quadrant::ALL {
        counts.add_row(vec![
            quadrant.label().to_string(),
            snapshot.quadrants.get(quadrant).to_string(),
        ]);
    }
    println!("{counts}");

    println!("Top by {}", snapshot.sort);
    print_rows(&snapshot.table);
}
