use anyhow::Result;
use clap::Parser;
use standup_voice::{create_router, AppState, Config};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "standup-voice")]
#[command(about = "Standup voice assistant backend")]
struct Args {
    /// Config file path, without extension
    #[arg(short, long, default_value = "config/standup-voice")]
    config: String,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Standup data directory: {}", cfg.storage.data_dir);
    if cfg.openai.api_key.is_none() {
        warn!("No OpenAI API key configured; /webrtc-signal will return a server error");
    }

    let state = AppState::new(&cfg)?;
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
