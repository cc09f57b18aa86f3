use std::path::PathBuf;

use crate::models::EpisodeFilter;

pub const DEFAULT_SITE_ORIGIN: &str = "https://www.webtoons.com";
const DEFAULT_DIR_NAME: &str = "webtoons-dl";
const MAX_BATCH_SIZE: usize = 8;

/// What to do when an episode in a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
	/// Stop the run and save nothing from the failing batch.
	#[default]
	Abort,
	/// Log the failure, save the rest of the batch and carry on.
	Skip,
}

/// Settings for a single run. Built once and passed by reference to every stage.
#[derive(Debug, Clone)]
pub struct Config {
	/// Root directory; each series gets its own subdirectory inside it.
	pub out_dir: PathBuf,
	pub confirm: bool,
	/// Stitch panels into one image per episode instead of saving them separately.
	pub compile: bool,
	pub zip: bool,
	pub filter: EpisodeFilter,
	pub failure_policy: FailurePolicy,
	pub batch_size: Option<usize>,
	/// Used as the referer on image requests and to resolve relative links.
	pub site_origin: String,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			out_dir: default_out_dir(),
			confirm: true,
			compile: true,
			zip: false,
			filter: EpisodeFilter::default(),
			failure_policy: FailurePolicy::default(),
			batch_size: None,
			site_origin: DEFAULT_SITE_ORIGIN.to_owned(),
		}
	}
}

impl Config {
	pub fn series_dir(&self, slug: &str) -> PathBuf {
		self.out_dir.join(slug)
	}

	/// Number of episodes fetched concurrently per batch.
	pub fn batch_size(&self) -> usize {
		match self.batch_size {
			Some(size) => size.max(1),
			None => {
				let cpus = std::thread::available_parallelism().map_or(1, |n| n.get());
				default_batch_size(cpus)
			}
		}
	}
}

pub fn default_batch_size(cpus: usize) -> usize {
	(cpus / 2).clamp(1, MAX_BATCH_SIZE)
}

pub fn default_out_dir() -> PathBuf {
	dirs::home_dir()
		.unwrap_or_else(|| PathBuf::from("."))
		.join(DEFAULT_DIR_NAME)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn batch_size_is_half_the_cpus_capped_at_eight() {
		assert_eq!(default_batch_size(1), 1);
		assert_eq!(default_batch_size(2), 1);
		assert_eq!(default_batch_size(6), 3);
		assert_eq!(default_batch_size(16), 8);
		assert_eq!(default_batch_size(64), 8);
	}

	#[test]
	fn explicit_batch_size_is_at_least_one() {
		let config = Config {
			batch_size: Some(0),
			..Config::default()
		};
		assert_eq!(config.batch_size(), 1);
	}

	#[test]
	fn series_dir_is_nested_under_out_dir() {
		let config = Config {
			out_dir: PathBuf::from("/tmp/comics"),
			..Config::default()
		};
		assert_eq!(
			config.series_dir("tower-of-god"),
			PathBuf::from("/tmp/comics/tower-of-god")
		);
	}
}
