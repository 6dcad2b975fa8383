use clap::Parser;
use es_monitor_bootstrap::bootstrap::Bootstrap;
use es_monitor_bootstrap::bootstrap_resources::BootstrapResources;
use es_monitor_bootstrap_cli::args::Args;
use es_monitor_bootstrap_cli::infra::logging::Logging;
use tracing::log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let _guard = Logging::init();

    info!("Starting with profile {}...", args.profile);

    let resources = BootstrapResources::from_profile(&args.profile).await?;

    let mut stdout = std::io::stdout();
    Bootstrap::run(&resources, &mut stdout).await?;

    info!("Stopped!");

    Ok(())
}
