use super::{Quadrant, QuadtreeNode, Region};

impl QuadtreeNode {
	/// Mirrors this subtree across the vertical axis of an image `width`
	/// pixels wide.
	///
	/// Sections are swapped east for west before descending so that each
	/// slot keeps naming the corner it renders in.
	pub fn flip_horizontal(&mut self, width: u32) {
		self.sections.swap(Quadrant::NW as usize, Quadrant::NE as usize);
		self.sections.swap(Quadrant::SW as usize, Quadrant::SE as usize);

		let Region { up_left: ul, low_right: lr } = self.region;
		let (mut left, mut right) = (width - 1 - lr.0, width - 1 - ul.0);
		if left > right {
			std::mem::swap(&mut left, &mut right);
		}
		self.region = Region::new((left, ul.1), (right, lr.1));

		for section in self.sections.iter_mut().flatten() {
			section.flip_horizontal(width);
		}
	}

	/// Rotates this subtree a quarter turn counter-clockwise.
	///
	/// `height` is the height of the image *after* rotation; every corner
	/// `(x, y)` moves to `(y, height - 1 - x)`.
	pub fn rotate_ccw(&mut self, height: u32) {
		let [nw, ne, sw, se] = std::mem::take(&mut self.sections);
		self.sections = [ne, se, nw, sw];

		let Region { up_left: ul, low_right: lr } = self.region;
		self.region = Region::new((ul.1, height - 1 - lr.0), (lr.1, height - 1 - ul.0));

		for section in self.sections.iter_mut().flatten() {
			section.rotate_ccw(height);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::{Quadrant, QuadtreeNode, Region};

	fn build(w: u32, h: u32) -> QuadtreeNode {
		let img = image::RgbaImage::from_fn(w, h, |x, y| image::Rgba([x as u8, y as u8, 0, 255]));
		QuadtreeNode::build(&img, Region::new((0, 0), (w - 1, h - 1)))
	}

	#[test]
	fn flip_moves_sections_west() {
		let mut node = build(1, 3);
		node.flip_horizontal(1);
		assert!(node.section(Quadrant::NE).is_some());
		assert!(node.section(Quadrant::SE).is_some());
		assert!(node.section(Quadrant::NW).is_none());
		assert!(node.section(Quadrant::SW).is_none());
	}

	#[test]
	fn flip_mirrors_regions() {
		let mut node = build(3, 2);
		node.flip_horizontal(3);
		assert_eq!(node.region, Region::new((0, 0), (2, 1)));
		// The two-column western half now sits in the east.
		assert_eq!(node.section(Quadrant::NE).unwrap().region, Region::new((1, 0), (2, 0)));
		assert_eq!(node.section(Quadrant::NW).unwrap().region, Region::new((0, 0), (0, 0)));
	}

	#[test]
	fn rotate_reassigns_sections() {
		// Single row: NW and NE present, rotating turns it into a single column
		// with the old NE on top.
		let mut node = build(3, 1);
		let old_ne = node.section(Quadrant::NE).unwrap().color;
		node.rotate_ccw(3);
		assert_eq!(node.region, Region::new((0, 0), (0, 2)));
		assert_eq!(node.section(Quadrant::NW).unwrap().color, old_ne);
		assert_eq!(node.section(Quadrant::NW).unwrap().region, Region::new((0, 0), (0, 0)));
		assert_eq!(node.section(Quadrant::SW).unwrap().region, Region::new((0, 1), (0, 2)));
		assert!(node.section(Quadrant::NE).is_none());
		assert!(node.section(Quadrant::SE).is_none());
	}
}
