use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::models::Episode;

/// Why a single episode could not be fetched, tagged with the episode it belongs to.
#[derive(Debug)]
pub struct EpisodeError {
	pub id: u32,
	pub title: String,
	pub source: Box<dyn Error + Send + Sync>,
}

impl EpisodeError {
	pub fn new(episode: &Episode, source: Box<dyn Error + Send + Sync>) -> Self {
		EpisodeError {
			id: episode.id,
			title: episode.title.clone(),
			source,
		}
	}
}

impl Display for EpisodeError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Episode {} ({}) failed: {}", self.id, self.title, self.source)
	}
}

impl Error for EpisodeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(self.source.as_ref())
	}
}
