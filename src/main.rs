use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playlab::{
    cli::{self, AnalyzeOptions},
    config, error,
    error::AppError,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightBlue.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Compute statistics for a playlist
    Analyze(AnalyzeArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Playlist link, e.g. https://open.spotify.com/playlist/<id> (prompted when omitted)
    url: Option<String>,

    /// List every artist by number of appearances
    #[clap(long)]
    all_artists: bool,

    /// Number of entries in the top artist rankings
    #[clap(long, default_value_t = 5)]
    top: usize,

    /// Print the statistics as JSON
    #[clap(long, conflicts_with = "all_artists")]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn fail(err: AppError) -> ! {
    if err.is_expected() {
        error!("{}", err);
    }

    log::error!("{:?}", err);
    error!("Something went wrong: {}", err);
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Auth => cli::auth().await,
        Command::Analyze(opt) => {
            let options = AnalyzeOptions {
                all_artists: opt.all_artists,
                top: opt.top,
                json: opt.json,
            };
            cli::analyze(opt.url, options).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        fail(err);
    }
}
