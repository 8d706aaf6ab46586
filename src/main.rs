use anyhow::{Context, Result};
use pynote::{app::App, config::EditorConfig, logging};
use tracing::info;

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let log_file = logging::init_logging().context("initialize logging failed")?;
	info!("pynote {} logging to {}", env!("CARGO_PKG_VERSION"), log_file.display());
	let app = App::new(EditorConfig::default());
	app.run().context("run app failed")
}
