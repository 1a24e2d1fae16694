// ABOUTME: Entry point for kiosk — a terminal information kiosk for a conference booth.
// ABOUTME: Parses CLI args, loads config and content, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use booth_kiosk::app::App;
use booth_kiosk::config::Config;
use booth_kiosk::content::BoothContent;
use booth_kiosk::logging;
use booth_kiosk::router::{MenuItem, render_view};

#[derive(Debug, Parser)]
#[command(name = "kiosk", version, about = "Conference booth information kiosk")]
struct Cli {
    /// Config file (default: ~/.booth-kiosk/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Booth content file replacing the built-in data.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Section shown at startup.
    #[arg(long, value_enum)]
    view: Option<MenuItem>,

    /// Print one section as plain text and exit.
    #[arg(long, value_enum)]
    print: Option<MenuItem>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let content_path = cli.content.or_else(|| config.content.path.clone());

    if let Some(section) = cli.print {
        logging::init_stderr(&config.logging.level)?;
        let content = BoothContent::load_or_default(content_path.as_deref())?;
        println!("{}", render_view(section, &content).plain_text());
        return Ok(());
    }

    logging::init_file(&config.logging.level, &config.log_file())?;
    let content = BoothContent::load_or_default(content_path.as_deref())?;
    let start_view = cli.view.unwrap_or(config.ui.start_view);

    App::new(config, content, start_view).run().await
}
