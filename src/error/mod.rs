pub mod episode_error;
pub mod generic_error;
pub mod ok_or_generic;
pub mod status_error;

pub use episode_error::EpisodeError;
pub use generic_error::GenericError;
pub use ok_or_generic::OkOrGeneric;
pub use status_error::StatusError;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
