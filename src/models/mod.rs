mod episode;
mod images;

pub use episode::{Episode, EpisodeFilter, EpisodeListing};
pub use images::EpisodeImages;
