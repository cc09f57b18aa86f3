use crate::config::Config;
use crate::error::{GenericError, OkOrGeneric, Result};
use crate::models::{Episode, EpisodeListing};
use crate::requester::Requester;
use crate::util::{collapse_whitespace, series_slug};
use scraper::{ElementRef, Html, Selector};
use url::Url;

lazy_static! {
	static ref LIST_URL_REGEX: regex::Regex = regex::Regex::new(
		r"^https?://(?:www\.)?webtoons\.com/[a-zA-Z]{2}/.*?/.*?/list\?(?:title_no|.*?&title_no)=\d+.*"
	)
	.unwrap();
	static ref TITLE_SELECTOR: Selector = Selector::parse("h1.subj").unwrap();
	static ref PAGINATION_SELECTOR: Selector = Selector::parse("div.paginate").unwrap();
	static ref LINK_SELECTOR: Selector = Selector::parse("a").unwrap();
	static ref EPISODE_SELECTOR: Selector = Selector::parse(r#"li[id^="episode_"]"#).unwrap();
	static ref EPISODE_TITLE_SELECTOR: Selector = Selector::parse("span.subj").unwrap();
}

pub const EXAMPLE_LIST_URL: &str =
	"https://www.webtoons.com/en/genre/comic-title/list?title_no=0000";

/// Checks that `url` is a series listing page carrying a `title_no`.
pub fn verify_url(url: &str) -> Result<()> {
	if !LIST_URL_REGEX.is_match(url) {
		return Err(GenericError(format!(
			"Invalid URL provided - URL should be of the form:\n{}",
			EXAMPLE_LIST_URL
		))
		.into());
	}
	Ok(())
}

fn element_text(element: ElementRef) -> String {
	collapse_whitespace(&element.text().collect::<String>())
}

pub fn parse_series_title(html: &str) -> Result<String> {
	let document = Html::parse_document(html);
	let title = document
		.select(&TITLE_SELECTOR)
		.next()
		.map(element_text)
		.filter(|t| !t.is_empty())
		.ok_or_generic("Unable to determine series: no title found.")?;
	Ok(title)
}

/// Raw hrefs of the pagination links, in page order.
pub fn parse_page_links(html: &str) -> Result<Vec<String>> {
	let document = Html::parse_document(html);
	let pagination = document
		.select(&PAGINATION_SELECTOR)
		.next()
		.ok_or_generic("Unable to determine series: no pagination found.")?;
	let links = pagination
		.select(&LINK_SELECTOR)
		.filter_map(|a| a.value().attr("href"))
		.map(str::to_owned)
		.collect();
	Ok(links)
}

/// Episodes on one listing page, oldest first. The site lists them newest first.
pub fn parse_episodes(html: &str) -> Result<Vec<Episode>> {
	let document = Html::parse_document(html);
	let mut episodes = Vec::new();
	for item in document.select(&EPISODE_SELECTOR) {
		let marker = item.value().id().unwrap_or_default();
		let id = marker
			.split('_')
			.nth(1)
			.and_then(|n| n.parse::<u32>().ok())
			.ok_or_generic(format!("Malformed episode marker '{}'.", marker))?;
		let link = item
			.select(&LINK_SELECTOR)
			.next()
			.ok_or_generic(format!("Episode {} has no link.", id))?;
		let href = link
			.value()
			.attr("href")
			.ok_or_generic(format!("Episode {} link has no href.", id))?;
		let title = link
			.select(&EPISODE_TITLE_SELECTOR)
			.next()
			.map(element_text)
			.ok_or_generic(format!("Episode {} has no title.", id))?;
		episodes.push(Episode::new(id, title, href));
	}
	episodes.reverse();
	Ok(episodes)
}

/// `#` points at the page we are already on; anything else is relative to the site.
pub fn resolve_page_link(href: &str, current_url: &str, site_origin: &str) -> Result<String> {
	if href == "#" || href.is_empty() {
		return Ok(current_url.to_owned());
	}
	let base = Url::parse(site_origin)?;
	Ok(base.join(href)?.to_string())
}

/// Walks every listing page of a series, last page first, and returns the episodes oldest first.
pub async fn list_episodes(
	requester: &Requester,
	config: &Config,
	url: &str,
) -> Result<EpisodeListing> {
	let first = requester.get_page(url).await?;
	let series_title = parse_series_title(&first.body)?;
	let page_links = parse_page_links(&first.body)?;
	log::debug!("Found {} listing pages for '{}'", page_links.len(), series_title);

	let mut all = Vec::new();
	if page_links.is_empty() {
		all.extend(parse_episodes(&first.body)?);
	}
	for (index, href) in page_links.iter().enumerate().rev() {
		log::info!("Getting episode list for page {}...", index + 1);
		let page_url = resolve_page_link(href, &first.url, &config.site_origin)?;
		let episodes = if page_url == first.url {
			parse_episodes(&first.body)?
		} else {
			let page = requester.get_page(&page_url).await?;
			parse_episodes(&page.body)?
		};
		all.extend(episodes);
	}

	let base = Url::parse(&first.url)?;
	for episode in all.iter_mut() {
		episode.url = base.join(&episode.url)?.to_string();
	}

	let selected = config.filter.apply(&all);
	Ok(EpisodeListing {
		series_slug: series_slug(&series_title),
		series_title,
		all,
		selected,
	})
}
