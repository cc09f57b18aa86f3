use reqwest::StatusCode;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A request that came back with anything other than 200 OK.
#[derive(Debug)]
pub struct StatusError {
	pub url: String,
	pub status: StatusCode,
}

impl StatusError {
	pub fn new(url: impl Into<String>, status: StatusCode) -> Self {
		StatusError {
			url: url.into(),
			status,
		}
	}
}

impl Display for StatusError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"Status code was not 200 OK.\nCode: {}\nURL: {}",
			self.status, self.url
		)
	}
}

impl Error for StatusError {}
