use anyhow::Result;
use log::info;
use std::env;
use std::net::SocketAddr;
use teloxide::prelude::*;

use orderlabel::bot;
use orderlabel::http_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. The subscriber's log bridge also carries the
    // log-macro events emitted by the extraction and rendering core.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting Order Label Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");
    let http_addr: SocketAddr = env::var("PRINT_HTTP_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
        .parse()?;

    // The print page serves independently of the bot's event loop.
    tokio::spawn(async move {
        if let Err(e) = http_server::serve(http_addr).await {
            log::error!("Print page server exited: {e}");
        }
    });

    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
