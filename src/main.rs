use clap::Parser;
use std::process::ExitCode;
use webtoons_dl::cli::Cli;
use webtoons_dl::downloader::Downloader;
use webtoons_dl::error::Result;
use webtoons_dl::prompt::StdinPrompt;

async fn run(cli: Cli) -> Result<()> {
	let url = cli.list_url()?;
	let config = cli.to_config()?;
	if cli.dir.is_none() {
		println!(
			"No directory provided, defaulting to \"{}\"...",
			config.out_dir.display()
		);
	}

	let downloader = Downloader::new(config);
	let summary = downloader.download(&url, Box::new(StdinPrompt)).await?;
	log::info!(
		"Saved {} episodes ({} files written, {} skipped)",
		summary.episodes_saved,
		summary.report.written.len(),
		summary.report.skipped.len()
	);
	if !summary.failed.is_empty() {
		log::warn!("{} episodes failed and were skipped", summary.failed.len());
	}
	println!("\nDone!");
	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp(None)
		.init();

	let cli = Cli::parse();
	let task = tokio::spawn(run(cli));
	tokio::select! {
		joined = task => match joined {
			Ok(Ok(())) => ExitCode::SUCCESS,
			Ok(Err(err)) => {
				eprintln!("Error: {}", err);
				ExitCode::FAILURE
			}
			Err(err) => {
				eprintln!("Error: {}", err);
				ExitCode::FAILURE
			}
		},
		_ = tokio::signal::ctrl_c() => {
			println!("\rExiting...");
			// A prompt may still be blocked on stdin, so don't wait for the runtime to wind down.
			std::process::exit(0);
		}
	}
}
