use crate::error::{GenericError, Result};
use image::{imageops, RgbImage};

/// Pastes panels top to bottom, left aligned, into one image as wide as the widest panel.
/// Space to the right of narrower panels stays black.
pub fn stitch(panels: &[RgbImage]) -> Result<RgbImage> {
	if panels.is_empty() {
		return Err(GenericError::from("Cannot stitch an episode with no panels.").into());
	}

	let width = panels.iter().map(|p| p.width()).max().unwrap_or(0);
	let height = panels.iter().map(|p| p.height()).sum::<u32>();
	let mut stitched = RgbImage::new(width, height);

	let mut y_offset: i64 = 0;
	for panel in panels {
		imageops::replace(&mut stitched, panel, 0, y_offset);
		y_offset += i64::from(panel.height());
	}
	Ok(stitched)
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::Rgb;

	fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
		RgbImage::from_pixel(width, height, Rgb(color))
	}

	#[test]
	fn size_is_max_width_by_total_height() {
		let panels = vec![
			solid(10, 4, [255, 0, 0]),
			solid(16, 7, [0, 255, 0]),
			solid(3, 2, [0, 0, 255]),
		];
		let stitched = stitch(&panels).unwrap();
		assert_eq!(stitched.dimensions(), (16, 13));
	}

	#[test]
	fn panels_stack_in_order_from_the_top() {
		let red = [255, 0, 0];
		let green = [0, 255, 0];
		let blue = [0, 0, 255];
		let panels = vec![solid(8, 3, red), solid(8, 5, green), solid(8, 2, blue)];
		let stitched = stitch(&panels).unwrap();

		for y in 0..3 {
			assert_eq!(stitched.get_pixel(4, y).0, red);
		}
		for y in 3..8 {
			assert_eq!(stitched.get_pixel(4, y).0, green);
		}
		for y in 8..10 {
			assert_eq!(stitched.get_pixel(4, y).0, blue);
		}
	}

	#[test]
	fn narrow_panels_are_left_aligned_with_unset_padding() {
		let white = [255, 255, 255];
		let panels = vec![solid(4, 2, white), solid(10, 2, white)];
		let stitched = stitch(&panels).unwrap();

		assert_eq!(stitched.get_pixel(0, 0).0, white);
		assert_eq!(stitched.get_pixel(3, 1).0, white);
		assert_eq!(stitched.get_pixel(4, 0).0, [0, 0, 0]);
		assert_eq!(stitched.get_pixel(9, 1).0, [0, 0, 0]);
		assert_eq!(stitched.get_pixel(9, 2).0, white);
	}

	#[test]
	fn single_panel_is_unchanged() {
		let panel = solid(5, 5, [12, 34, 56]);
		assert_eq!(stitch(&[panel.clone()]).unwrap(), panel);
	}

	#[test]
	fn empty_input_is_an_error() {
		assert!(stitch(&[]).is_err());
	}
}
