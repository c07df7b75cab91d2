use jobly_server::AppConfig;
use jobly_server::observability::init_tracing;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load()?;
    init_tracing(&cfg.log.level);
    jobly_server::serve(&cfg).await
}
