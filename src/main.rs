use anyhow::Result;
use stackwm::display_servers::XlibDisplayServer;
use stackwm::models::Manager;
use stackwm::utils::child_process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    child_process::register_child_hook();

    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut manager = Manager::<XlibDisplayServer>::new()?;
    tracing::info!("stackwm started");
    manager.event_loop();
    Ok(())
}
