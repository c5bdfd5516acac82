use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use balance_history::cli::{
    handle_chart_command, handle_export_command, handle_show_command, handle_view_command,
    ExportArgs, QueryArgs,
};
use balance_history::config::{paths::HistoryPaths, settings::Settings};
use balance_history::logging;
use balance_history::presenter::RenderOutcome;

#[derive(Parser)]
#[command(
    name = "balance-history",
    author = "Kaylee Beyene",
    version,
    about = "Chart the balance history of your budgets",
    long_about = "balance-history fetches the balances of selected budgets over a \
                  date range, prints the difference and growth between the first \
                  and last day, and charts each budget in the terminal or as a \
                  Chart.js configuration."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statistics and a per-budget summary
    Show {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the statistics as HTML table rows
        #[arg(long)]
        html: bool,
    },

    /// Write the Chart.js configuration
    Chart {
        #[command(flatten)]
        query: QueryArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the series and statistics
    Export {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Launch the interactive chart
    #[command(alias = "tui")]
    View {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = HistoryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Show { query, html }) => {
            logging::init_stderr()?;
            let outcome = handle_show_command(&settings, &query, html).await?;
            Ok(exit_code(&outcome))
        }
        Some(Commands::Chart { query, output }) => {
            logging::init_stderr()?;
            let outcome = handle_chart_command(&settings, &query, output).await?;
            Ok(exit_code(&outcome))
        }
        Some(Commands::Export { query, export }) => {
            logging::init_stderr()?;
            handle_export_command(&paths, &settings, &query, &export).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::View { query }) => {
            paths.ensure_directories()?;
            logging::init_file(&paths.log_file())?;
            handle_view_command(&settings, &query).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Init) => {
            println!("Initializing balance-history at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Set 'endpoint' there, or pass --endpoint, to point at your server.");
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config) => {
            println!("balance-history Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Endpoint:        {}", settings.endpoint);
            println!(
                "  CSRF token:      {}",
                if settings.csrf_token.is_some() { "set" } else { "not set" }
            );
            println!(
                "  Cookie:          {}",
                if settings.cookie.is_some() { "set" } else { "not set" }
            );
            println!("  Date format:     {}", settings.date_format);
            println!("  Default range:   {} days", settings.default_range_days);
            println!("  Default budgets: {}", settings.default_budgets.join(", "));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("balance-history - budget balance charts");
            println!();
            println!("Run 'balance-history --help' for usage information.");
            println!("Run 'balance-history view -b <budget>' to launch the interactive chart.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(outcome: &RenderOutcome) -> ExitCode {
    if outcome.is_rendered() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
