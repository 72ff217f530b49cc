use crate::prelude::{eprintln, print, *};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use wikipedia_core::display::{format_error_line, format_summary_text, WRAP_WIDTH};
use wikipedia_core::summary::{API_URL, DEFAULT_LANG};

mod error;
mod prelude;
mod summary;

use summary::{create_client, fetch_random_summary, FetchConfig, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Print the title and summary of a random Wikipedia article"
)]
pub struct App {
    /// Language of the article
    #[arg(
        short,
        long,
        env = "WIKIPEDIA_LANG",
        value_name = "LANG",
        default_value = DEFAULT_LANG
    )]
    pub lang: String,

    /// Request timeout in seconds
    #[arg(short, long, env = "WIKIPEDIA_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// URL template of the random summary endpoint ({lang} is replaced)
    #[arg(long, env = "WIKIPEDIA_API_URL", default_value = API_URL, hide = true)]
    pub api_url: String,

    /// Whether to display additional information.
    #[arg(short, long, env = "WIKIPEDIA_VERBOSE", default_value = "false")]
    pub verbose: bool,
}

impl App {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            api_url: self.api_url.clone(),
            lang: self.lang.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

async fn run(app: App) -> Result<()> {
    let config = app.fetch_config();

    if app.verbose {
        eprintln!("Fetching {}", config.url());
    }

    let client = create_client(&config).context("Failed to build HTTP client")?;
    let article = fetch_random_summary(&client, &config).await?;

    print!("{}", format_summary_text(&article, WRAP_WIDTH));

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    if let Err(err) = color_eyre::install() {
        eprintln!("{}", format_error_line(&err.to_string()));
        return ExitCode::FAILURE;
    }

    let app = App::parse();

    match run(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error_line(&format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}
