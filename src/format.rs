use image::ImageFormat;
use std::borrow::Cow;

/// Output image format along with the file extension it is saved under.
pub struct Format<'a> {
	format_ext: Cow<'a, str>,
	image_format: ImageFormat,
}

impl<'a> Format<'a> {
	/// Construct format with EXACT format extension on comptime.
	pub const fn from_exact_extension(ext: &'a str, image_format: ImageFormat) -> Self {
		Self {
			format_ext: Cow::Borrowed(ext),
			image_format,
		}
	}

	pub fn get_extension(&self) -> &str {
		&self.format_ext
	}

	pub fn image_format(&self) -> ImageFormat {
		self.image_format
	}

	/// `stem` with this format's extension appended.
	pub fn file_name(&self, stem: impl AsRef<str>) -> String {
		format!("{}{}", stem.as_ref(), self.get_extension())
	}
}

pub const JPEG: Format<'static> = Format::from_exact_extension(".jpg", ImageFormat::Jpeg);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn jpeg_file_name() {
		assert_eq!(JPEG.file_name("12. Pilot"), "12. Pilot.jpg");
		assert_eq!(JPEG.image_format(), ImageFormat::Jpeg);
	}
}
