use crate::error::{Result, StatusError};
use reqwest::header::REFERER;
use reqwest::{Client, Response, StatusCode};

/// A fetched HTML page together with the URL it was finally served from.
pub struct Page {
	pub url: String,
	pub body: String,
}

/// Thin wrapper around a shared HTTP client. Every non-200 response is an error.
#[derive(Clone)]
pub struct Requester {
	net: Client,
	referer: String,
}

impl Requester {
	pub fn new(referer: impl Into<String>) -> Self {
		Requester {
			net: Client::new(),
			referer: referer.into(),
		}
	}

	fn check_status(url: &str, response: &Response) -> Result<()> {
		let status = response.status();
		if status != StatusCode::OK {
			log::debug!("GET {} -> {}", url, status);
			return Err(StatusError::new(url, status).into());
		}
		Ok(())
	}

	pub async fn get_page(&self, url: &str) -> Result<Page> {
		let response = self.net.get(url).send().await?;
		Self::check_status(url, &response)?;
		let final_url = response.url().to_string();
		let body = response.text().await?;
		Ok(Page {
			url: final_url,
			body,
		})
	}

	/// Image hosts refuse hot-linked requests, so these always carry the site referer.
	pub async fn get_image(&self, url: &str) -> Result<Vec<u8>> {
		let response = self
			.net
			.get(url)
			.header(REFERER, self.referer.as_str())
			.send()
			.await?;
		Self::check_status(url, &response)?;
		let bytes = response.bytes().await?;
		Ok(bytes.to_vec())
	}
}
