use crate::config::{default_out_dir, Config, FailurePolicy};
use crate::error::{GenericError, Result};
use crate::models::EpisodeFilter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Download comics from webtoons.com")]
pub struct Cli {
	/// URL of the comic's episode list
	#[arg(value_name = "URL")]
	pub url: Option<String>,

	/// URL of the comic's episode list
	#[arg(long = "url", id = "url_flag", value_name = "URL")]
	pub url_flag: Option<String>,

	/// Directory to save images to
	#[arg(long, value_name = "DIR")]
	pub dir: Option<PathBuf>,

	/// Zip images into a single file when done
	#[arg(long)]
	pub zip: bool,

	/// Skip confirmation prompts
	#[arg(long)]
	pub no_confirm: bool,

	/// Episode to start downloading from (inclusive)
	#[arg(long = "from", value_name = "EPISODE")]
	pub from: Option<u32>,

	/// Episode to stop downloading at (inclusive)
	#[arg(long = "to", value_name = "EPISODE")]
	pub to: Option<u32>,

	/// Save panels separately instead of stitching them into one image
	#[arg(long)]
	pub no_compile: bool,

	/// Keep going when an episode fails instead of stopping the run
	#[arg(long)]
	pub skip_failed: bool,
}

impl Cli {
	pub fn list_url(&self) -> Result<String> {
		self.url_flag
			.clone()
			.or_else(|| self.url.clone())
			.map(|u| u.trim().to_owned())
			.ok_or_else(|| GenericError::from("No URL provided.").into())
	}

	pub fn filter(&self) -> Result<EpisodeFilter> {
		if let (Some(from), Some(to)) = (self.from, self.to) {
			if from > to {
				return Err(GenericError(format!(
					"--from ({}) must not be greater than --to ({}).",
					from, to
				))
				.into());
			}
		}
		Ok(EpisodeFilter::new(self.from, self.to))
	}

	pub fn to_config(&self) -> Result<Config> {
		Ok(Config {
			out_dir: self.dir.clone().unwrap_or_else(default_out_dir),
			confirm: !self.no_confirm,
			compile: !self.no_compile,
			zip: self.zip,
			filter: self.filter()?,
			failure_policy: if self.skip_failed {
				FailurePolicy::Skip
			} else {
				FailurePolicy::Abort
			},
			..Config::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const URL: &str = "https://www.webtoons.com/en/fantasy/tower-of-god/list?title_no=95";

	#[test]
	fn positional_url_and_defaults() {
		let cli = Cli::try_parse_from(["webtoons-dl", URL]).unwrap();
		assert_eq!(cli.list_url().unwrap(), URL);

		let config = cli.to_config().unwrap();
		assert!(config.confirm);
		assert!(config.compile);
		assert!(!config.zip);
		assert!(config.filter.is_unbounded());
		assert_eq!(config.failure_policy, FailurePolicy::Abort);
		assert_eq!(config.out_dir, default_out_dir());
	}

	#[test]
	fn flags_map_onto_config() {
		let cli = Cli::try_parse_from([
			"webtoons-dl",
			"--url",
			URL,
			"--dir",
			"/tmp/comics",
			"--zip",
			"--no-confirm",
			"--no-compile",
			"--skip-failed",
			"--from",
			"3",
			"--to",
			"9",
		])
		.unwrap();
		assert_eq!(cli.list_url().unwrap(), URL);

		let config = cli.to_config().unwrap();
		assert_eq!(config.out_dir, PathBuf::from("/tmp/comics"));
		assert!(config.zip);
		assert!(!config.confirm);
		assert!(!config.compile);
		assert_eq!(config.failure_policy, FailurePolicy::Skip);
		assert_eq!(config.filter, EpisodeFilter::new(Some(3), Some(9)));
	}

	#[test]
	fn missing_url_is_an_error() {
		let cli = Cli::try_parse_from(["webtoons-dl"]).unwrap();
		assert!(cli.list_url().is_err());
	}

	#[test]
	fn reversed_range_is_rejected() {
		let cli = Cli::try_parse_from(["webtoons-dl", URL, "--from", "9", "--to", "3"]).unwrap();
		assert!(cli.to_config().is_err());
	}

	#[test]
	fn non_numeric_episode_is_rejected() {
		assert!(Cli::try_parse_from(["webtoons-dl", URL, "--from", "first"]).is_err());
	}
}
