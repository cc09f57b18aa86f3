/// One installment of a series as listed on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
	pub id: u32,
	pub title: String,
	pub url: String,
}

impl Episode {
	pub fn new(id: u32, title: impl Into<String>, url: impl Into<String>) -> Self {
		Episode {
			id,
			title: title.into(),
			url: url.into(),
		}
	}
}

/// Inclusive range over episode ids. Either bound may be left open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeFilter {
	pub start: Option<u32>,
	pub end: Option<u32>,
}

impl EpisodeFilter {
	pub fn new(start: Option<u32>, end: Option<u32>) -> Self {
		EpisodeFilter { start, end }
	}

	pub fn is_unbounded(&self) -> bool {
		self.start.is_none() && self.end.is_none()
	}

	pub fn contains(&self, id: u32) -> bool {
		self.start.map_or(true, |s| s <= id) && self.end.map_or(true, |e| id <= e)
	}

	/// Keeps the matching episodes in their listed order.
	pub fn apply(&self, episodes: &[Episode]) -> Vec<Episode> {
		if self.is_unbounded() {
			return episodes.to_vec();
		}
		episodes
			.iter()
			.filter(|ep| self.contains(ep.id))
			.cloned()
			.collect()
	}
}

/// Everything the lister found for a series.
#[derive(Debug, Clone)]
pub struct EpisodeListing {
	pub series_title: String,
	pub series_slug: String,
	/// Every episode, oldest first.
	pub all: Vec<Episode>,
	/// The subsequence of `all` selected by the filter.
	pub selected: Vec<Episode>,
}
