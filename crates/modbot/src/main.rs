use std::sync::Arc;

use modbot_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), modbot_core::Error> {
    modbot_core::logging::init("modbot")?;

    let cfg = Arc::new(Config::load()?);

    modbot_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| modbot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
