use crate::config::{Config, FailurePolicy};
use crate::error::{EpisodeError, Result};
use crate::lister::{list_episodes, verify_url};
use crate::models::EpisodeListing;
use crate::prompt::Prompt;
use crate::requester::Requester;
use crate::saver::{ensure_directory, SaveReport, Saver};
use crate::scheduler::{partition, run_batch};
use std::path::{Path, PathBuf};

/// What a finished run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
	pub series_dir: PathBuf,
	pub episodes_saved: usize,
	pub report: SaveReport,
	/// Episodes that failed and were skipped. Always empty under `FailurePolicy::Abort`.
	pub failed: Vec<EpisodeError>,
	pub archive: Option<PathBuf>,
}

pub struct Downloader {
	requester: Requester,
	config: Config,
}

fn ready_message(listing: &EpisodeListing, dir: &Path) -> String {
	if listing.selected.len() != listing.all.len() {
		format!(
			"Ready to download {} episodes (out of {}) to \"{}\"",
			listing.selected.len(),
			listing.all.len(),
			dir.display()
		)
	} else {
		format!(
			"Ready to download {} episodes to \"{}\"",
			listing.selected.len(),
			dir.display()
		)
	}
}

impl Downloader {
	pub fn new(config: Config) -> Self {
		Downloader {
			requester: Requester::new(config.site_origin.clone()),
			config,
		}
	}

	pub async fn list(&self, url: &str) -> Result<EpisodeListing> {
		list_episodes(&self.requester, &self.config, url).await
	}

	/// Validates the listing URL, then downloads the series.
	pub async fn download(&self, url: &str, prompt: Box<dyn Prompt>) -> Result<RunSummary> {
		verify_url(url)?;
		self.download_series(url, prompt).await
	}

	/// Lists the series at `url` and downloads the selected episodes batch by batch.
	pub async fn download_series(&self, url: &str, prompt: Box<dyn Prompt>) -> Result<RunSummary> {
		ensure_directory(&self.config.out_dir)?;

		let listing = self.list(url).await?;
		let series_dir = self.config.series_dir(&listing.series_slug);
		ensure_directory(&series_dir)?;

		println!("{}", ready_message(&listing, &series_dir));
		let mut saver = Saver::new(&series_dir, self.config.confirm, prompt);
		if self.config.confirm {
			saver.prompt().wait_for_start()?;
		}

		let mut summary = RunSummary {
			series_dir,
			..RunSummary::default()
		};
		let batch_size = self.config.batch_size();
		for batch in partition(&listing.selected, batch_size) {
			let mut fetched = Vec::with_capacity(batch.len());
			let mut failures = Vec::new();
			for outcome in run_batch(&self.requester, &self.config, batch).await {
				match outcome.result {
					Ok(images) => fetched.push((outcome.episode, images)),
					Err(err) => failures.push(err),
				}
			}

			// Nothing from a failed batch is written under the abort policy.
			if self.config.failure_policy == FailurePolicy::Abort {
				if let Some(err) = failures.into_iter().next() {
					return Err(err.into());
				}
			} else {
				for err in &failures {
					log::error!("{}", err);
				}
				summary.failed.extend(failures);
			}

			for (episode, images) in fetched {
				let report = saver.save_episode(&episode, &images)?;
				summary.report.merge(report);
				summary.episodes_saved += 1;
			}
		}

		if self.config.zip && summary.failed.is_empty() {
			log::info!("Zipping images...");
			summary.archive = saver.zip_series()?;
		}
		Ok(summary)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::Episode;

	fn listing(all: u32, selected: u32) -> EpisodeListing {
		let episodes: Vec<Episode> = (1..=all)
			.map(|id| Episode::new(id, "t", "u"))
			.collect();
		EpisodeListing {
			series_title: "Series".into(),
			series_slug: "series".into(),
			selected: episodes[..selected as usize].to_vec(),
			all: episodes,
		}
	}

	#[test]
	fn ready_message_mentions_total_only_when_filtered() {
		let dir = Path::new("/comics/series");
		assert_eq!(
			ready_message(&listing(5, 5), dir),
			"Ready to download 5 episodes to \"/comics/series\""
		);
		assert_eq!(
			ready_message(&listing(5, 2), dir),
			"Ready to download 2 episodes (out of 5) to \"/comics/series\""
		);
	}
}
