use docserve::config::Config;
use docserve::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    // Runs until the process is killed.
    server::listener::run(&cfg).await
}
