use image::RgbImage;

/// What the fetcher produced for one episode.
pub enum EpisodeImages {
	/// All panels pasted into one tall image.
	Stitched(RgbImage),
	/// The decoded panels, top to bottom.
	Panels(Vec<RgbImage>),
}
