use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use citypath_lib::{Frontier, RouteOptions, WeightMode};

mod commands;

use commands::DatasetArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths between named locations")]
struct Cli {
    /// Directory holding cityxy.txt and citypairs.txt (falls back to CITYPATH_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the vertex file.
    #[arg(long, global = true)]
    vertices: Option<PathBuf>,

    /// Override the edge file.
    #[arg(long, global = true)]
    edges: Option<PathBuf>,

    /// Where edge weights come from.
    #[arg(long, global = true, value_enum, default_value_t = WeightsArg::Geometry)]
    weights: WeightsArg,

    /// How the next vertex to finalize is selected.
    #[arg(long, global = true, value_enum, default_value_t = FrontierArg::LinearScan)]
    frontier: FrontierArg,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two locations.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
    /// List the shortest distance from one location to every other.
    Distances {
        /// Source location name.
        #[arg(long = "from")]
        from: String,
    },
    /// Print every location with its outgoing edges and weights.
    Adjacency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WeightsArg {
    /// Derive weights from coordinates before every query.
    Geometry,
    /// Use the weights listed in the edge file.
    Supplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FrontierArg {
    LinearScan,
    BinaryHeap,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Rich,
    Json,
}

impl Cli {
    fn route_options(&self) -> RouteOptions {
        RouteOptions {
            weights: match self.weights {
                WeightsArg::Geometry => WeightMode::Geometry,
                WeightsArg::Supplied => WeightMode::Supplied,
            },
            frontier: match self.frontier {
                FrontierArg::LinearScan => Frontier::LinearScan,
                FrontierArg::BinaryHeap => Frontier::BinaryHeap,
            },
        }
    }

    fn dataset_args(&self) -> DatasetArgs {
        DatasetArgs {
            data_dir: self.data_dir.clone(),
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset_args();
    let options = cli.route_options();

    match &cli.command {
        Command::Route { from, to } => {
            commands::route::handle_route(&dataset, &options, cli.format, from, to)
        }
        Command::Distances { from } => {
            commands::distances::handle_distances(&dataset, &options, cli.format, from)
        }
        Command::Adjacency => commands::adjacency::handle_adjacency(&dataset, &options, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
