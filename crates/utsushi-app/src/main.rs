use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utsushi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = utsushi_config::Config::new();
    tracing::info!(lang = %config.ocr.language, "starting utsushi");

    // Blocks on the Slint event loop; OCR runs land on the blocking pool.
    utsushi_ui::run(config)
}
