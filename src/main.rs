use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use sondeur::config::Config;
use sondeur::generator::gemini::{DEFAULT_MODEL, GeminiGenerator};
use sondeur::orchestrator::Orchestrator;
use sondeur::publisher::telegram::TelegramPublisher;
use sondeur::server::{AppState, router};

#[derive(Parser)]
#[command(name = "sondeur", version, about = "Asks Gemini, polls Telegram.")]
struct Cli {
    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN")]
    bot_token: String,

    /// Telegram chat the polls are published to
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    chat_id: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: String,

    /// Gemini model used for question generation
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// HTTP listening port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            bot_token: self.bot_token,
            chat_id: self.chat_id,
            gemini_api_key: self.gemini_api_key,
            model: self.model,
            port: self.port,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "sondeur=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().into_config();

    let generator = Arc::new(GeminiGenerator::new(&config));
    let publisher = Arc::new(TelegramPublisher::new(&config));
    let orchestrator = Arc::new(Orchestrator::new(generator, publisher));

    let app = router(AppState { orchestrator });

    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, config.port).into();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
