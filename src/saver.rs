use crate::archive::{zip_directory, ARCHIVE_NAME};
use crate::error::{GenericError, Result};
use crate::format::{Format, JPEG};
use crate::models::{Episode, EpisodeImages};
use crate::prompt::Prompt;
use crate::util::legalize_filename;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Files touched while saving one or more episodes.
#[derive(Debug, Default)]
pub struct SaveReport {
	pub written: Vec<PathBuf>,
	pub skipped: Vec<PathBuf>,
}

impl SaveReport {
	pub fn merge(&mut self, other: SaveReport) {
		self.written.extend(other.written);
		self.skipped.extend(other.skipped);
	}
}

/// Makes sure `dir` is a directory, creating it if needed.
pub fn ensure_directory(dir: &Path) -> Result<()> {
	if dir.exists() && !dir.is_dir() {
		return Err(GenericError(format!(
			"Invalid download directory: {} exists and is not a directory.",
			dir.display()
		))
		.into());
	}
	fs::create_dir_all(dir)?;
	Ok(())
}

/// `"{id}. {title}"`, used for both the stitched file and the per-panel directory.
pub fn episode_stem(episode: &Episode) -> String {
	format!("{}. {}", episode.id, legalize_filename(&episode.title))
}

/// Writes episode images into a series directory.
pub struct Saver {
	series_dir: PathBuf,
	confirm: bool,
	prompt: Box<dyn Prompt>,
	format: Format<'static>,
}

impl Saver {
	pub fn new(series_dir: impl Into<PathBuf>, confirm: bool, prompt: Box<dyn Prompt>) -> Self {
		Saver {
			series_dir: series_dir.into(),
			confirm,
			prompt,
			format: JPEG,
		}
	}

	pub fn prompt(&mut self) -> &mut dyn Prompt {
		self.prompt.as_mut()
	}

	fn should_write(&mut self, path: &Path) -> Result<bool> {
		if self.confirm && path.exists() {
			return self.prompt.confirm_overwrite(path);
		}
		Ok(true)
	}

	fn write_image(&mut self, image: &RgbImage, path: PathBuf, report: &mut SaveReport) -> Result<()> {
		if !self.should_write(&path)? {
			log::info!("Skipped \"{}\"", path.display());
			report.skipped.push(path);
			return Ok(());
		}
		image.save_with_format(&path, self.format.image_format())?;
		log::info!("Saved \"{}\"", path.display());
		report.written.push(path);
		Ok(())
	}

	/// Packs the series directory into `images.zip`. Returns `None` when the user
	/// declines to replace an existing archive; the entries are then left unpacked.
	pub fn zip_series(&mut self) -> Result<Option<PathBuf>> {
		let zip_path = self.series_dir.join(ARCHIVE_NAME);
		if !self.should_write(&zip_path)? {
			log::info!("Skipped zipping, \"{}\" kept", zip_path.display());
			return Ok(None);
		}
		Ok(Some(zip_directory(&self.series_dir)?))
	}

	pub fn save_episode(&mut self, episode: &Episode, images: &EpisodeImages) -> Result<SaveReport> {
		let mut report = SaveReport::default();
		let stem = episode_stem(episode);
		match images {
			EpisodeImages::Stitched(image) => {
				let path = self.series_dir.join(self.format.file_name(&stem));
				self.write_image(image, path, &mut report)?;
			}
			EpisodeImages::Panels(panels) => {
				let episode_dir = self.series_dir.join(&stem);
				ensure_directory(&episode_dir)?;
				for (index, panel) in panels.iter().enumerate() {
					let path = episode_dir.join(self.format.file_name((index + 1).to_string()));
					self.write_image(panel, path, &mut report)?;
				}
			}
		}
		Ok(report)
	}
}
