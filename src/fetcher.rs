use crate::config::Config;
use crate::error::{GenericError, Result};
use crate::models::{Episode, EpisodeImages};
use crate::requester::Requester;
use crate::stitcher::stitch;
use image::{ImageReader, RgbImage};
use rayon::prelude::*;
use scraper::{Html, Selector};
use std::io::Cursor;
use url::Url;

lazy_static! {
	static ref PANEL_SELECTOR: Selector = Selector::parse("img._images").unwrap();
}

/// Panel image URLs of an episode page, top to bottom, resolved against `page_url`.
pub fn parse_panel_urls(html: &str, page_url: &str) -> Result<Vec<String>> {
	let base = Url::parse(page_url)?;
	let document = Html::parse_document(html);
	let mut urls = Vec::new();
	for img in document.select(&PANEL_SELECTOR) {
		if let Some(src) = img.value().attr("data-url") {
			urls.push(base.join(src.trim())?.to_string());
		}
	}
	if urls.is_empty() {
		return Err(GenericError(format!("No panels found on {}.", page_url)).into());
	}
	Ok(urls)
}

/// Decodes one panel, dropping any alpha channel.
pub fn decode_panel(bytes: &[u8]) -> Result<RgbImage> {
	let image = ImageReader::new(Cursor::new(bytes))
		.with_guessed_format()?
		.decode()?;
	Ok(image.to_rgb8())
}

fn decode_panels(raw: Vec<Vec<u8>>) -> Result<Vec<RgbImage>> {
	raw.par_iter().map(|bytes| decode_panel(bytes)).collect()
}

async fn download_panels(requester: &Requester, episode_url: &str) -> Result<Vec<Vec<u8>>> {
	log::info!("Fetching images from {}...", episode_url);
	let page = requester.get_page(episode_url).await?;
	let urls = parse_panel_urls(&page.body, &page.url)?;

	let mut raw = Vec::with_capacity(urls.len());
	for url in &urls {
		raw.push(requester.get_image(url).await?);
	}
	log::debug!("Downloaded {} panels from {}", raw.len(), episode_url);
	Ok(raw)
}

/// Fetches and decodes every panel of an episode, in reading order.
pub async fn fetch_panels(requester: &Requester, episode_url: &str) -> Result<Vec<RgbImage>> {
	let raw = download_panels(requester, episode_url).await?;
	tokio::task::spawn_blocking(move || decode_panels(raw)).await?
}

/// Fetches an episode and stitches its panels into a single image.
pub async fn fetch_stitched(requester: &Requester, episode_url: &str) -> Result<RgbImage> {
	let raw = download_panels(requester, episode_url).await?;
	tokio::task::spawn_blocking(move || stitch(&decode_panels(raw)?)).await?
}

pub async fn fetch_episode(
	requester: &Requester,
	config: &Config,
	episode: &Episode,
) -> Result<EpisodeImages> {
	if config.compile {
		Ok(EpisodeImages::Stitched(
			fetch_stitched(requester, &episode.url).await?,
		))
	} else {
		Ok(EpisodeImages::Panels(
			fetch_panels(requester, &episode.url).await?,
		))
	}
}
