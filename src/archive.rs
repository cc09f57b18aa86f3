use crate::error::Result;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARCHIVE_NAME: &str = "images.zip";

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut entries = fs::read_dir(dir)?
		.map(|entry| entry.map(|e| e.path()))
		.collect::<io::Result<Vec<_>>>()?;
	entries.sort();
	Ok(entries)
}

fn add_entry(
	writer: &mut ZipWriter<File>,
	path: &Path,
	name: &str,
	options: FileOptions,
) -> Result<()> {
	if path.is_dir() {
		writer.add_directory(name, options)?;
		for child in sorted_entries(path)? {
			let child_name = child
				.file_name()
				.map(|n| n.to_string_lossy().into_owned())
				.unwrap_or_default();
			add_entry(writer, &child, &format!("{}/{}", name, child_name), options)?;
		}
	} else {
		writer.start_file(name, options)?;
		io::copy(&mut File::open(path)?, writer)?;
	}
	Ok(())
}

/// Packs every top-level entry of `dir` into `dir/images.zip`, then removes the originals.
pub fn zip_directory(dir: &Path) -> Result<PathBuf> {
	let zip_path = dir.join(ARCHIVE_NAME);
	let entries: Vec<PathBuf> = sorted_entries(dir)?
		.into_iter()
		.filter(|p| p != &zip_path)
		.collect();

	let mut writer = ZipWriter::new(File::create(&zip_path)?);
	let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
	for path in &entries {
		let name = path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_default();
		add_entry(&mut writer, path, &name, options)?;
	}
	writer.finish()?;

	for path in &entries {
		if path.is_dir() {
			fs::remove_dir_all(path)?;
		} else {
			fs::remove_file(path)?;
		}
	}
	log::info!("Zipped images to {}", zip_path.display());
	Ok(zip_path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Read;
	use tempfile::TempDir;
	use zip::ZipArchive;

	#[test]
	fn zips_files_and_episode_directories() {
		let tmp = TempDir::new().unwrap();
		let dir = tmp.path();
		fs::write(dir.join("1. Pilot.jpg"), b"one").unwrap();
		fs::create_dir(dir.join("2. Next")).unwrap();
		fs::write(dir.join("2. Next").join("1.jpg"), b"panel").unwrap();

		let zip_path = zip_directory(dir).unwrap();
		assert_eq!(zip_path, dir.join(ARCHIVE_NAME));

		let remaining: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
		assert_eq!(remaining, vec![zip_path.clone()]);

		let mut archive = ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
		let mut contents = String::new();
		archive
			.by_name("2. Next/1.jpg")
			.unwrap()
			.read_to_string(&mut contents)
			.unwrap();
		assert_eq!(contents, "panel");
		assert!(archive.by_name("1. Pilot.jpg").is_ok());
	}

	#[test]
	fn replaced_archive_is_not_packed_into_itself() {
		let tmp = TempDir::new().unwrap();
		let dir = tmp.path();
		fs::write(dir.join(ARCHIVE_NAME), b"stale").unwrap();
		fs::write(dir.join("3. Ep.jpg"), b"three").unwrap();

		let zip_path = zip_directory(dir).unwrap();
		let mut archive = ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
		assert_eq!(archive.len(), 1);
		assert!(archive.by_name("3. Ep.jpg").is_ok());
	}
}
