use regex::Regex;

lazy_static! {
	static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
	static ref ILLEGAL_CHARS_REGEX: Regex = Regex::new(r"[^a-zA-Z0-9\s\-_.()#]+").unwrap();
}

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(string: &str) -> String {
	WHITESPACE_REGEX.replace_all(string.trim(), " ").into_owned()
}

/// Collapses whitespace, then strips everything outside letters, digits, spaces and `-_.()#`.
/// Names line up with files written by earlier releases, so overwrite checks still match.
pub fn legalize_filename(name: &str) -> String {
	let name = collapse_whitespace(name);
	ILLEGAL_CHARS_REGEX.replace_all(&name, "").into_owned()
}

/// Directory name for a series: lower-cased, spaces replaced with hyphens.
pub fn series_slug(title: &str) -> String {
	title.trim().to_lowercase().replace(' ', "-")
}
