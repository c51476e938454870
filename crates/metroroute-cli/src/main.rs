use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metroroute_cli::commands::demo::handle_demo_command;
use metroroute_cli::commands::load_network_or_sample;
use metroroute_cli::commands::route::{
    handle_route_command, AlgorithmArg, HeuristicArg, RouteCommandArgs,
};
use metroroute_cli::commands::stations::{handle_lines_command, handle_stations_command};
use metroroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Metro network route finding")]
struct Cli {
    /// Network document to load instead of the sample network.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two station ids.
    Route {
        /// Starting station id.
        #[arg(long = "from")]
        from: String,
        /// Destination station id.
        #[arg(long = "to")]
        to: String,
        /// Routing question to answer.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Fastest)]
        algorithm: AlgorithmArg,
        /// Estimate used by the fastest-route search.
        #[arg(long, value_enum, default_value_t = HeuristicArg::Zero)]
        heuristic: HeuristicArg,
    },
    /// List stations, optionally only those of one line.
    Stations {
        #[arg(long)]
        line: Option<String>,
    },
    /// List lines and their stations.
    Lines,
    /// Run the built-in scenarios on the sample network.
    Demo,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            heuristic,
        } => {
            let network = load_network_or_sample(cli.network.as_deref())?;
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                heuristic,
            };
            handle_route_command(&network, cli.format, &args)
        }
        Command::Stations { line } => {
            let network = load_network_or_sample(cli.network.as_deref())?;
            handle_stations_command(&network, cli.format, line.as_deref())
        }
        Command::Lines => {
            let network = load_network_or_sample(cli.network.as_deref())?;
            handle_lines_command(&network, cli.format)
        }
        Command::Demo => handle_demo_command(cli.format),
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
