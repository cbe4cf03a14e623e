pub mod error;
pub mod pixel;

use pixel::{RgbaPixel, SourceImage, WeightedSum};

/// Inclusive rectangle of pixel coordinates, stored as its upper-left and
/// lower-right corners.
///
/// `up_left` is never to the right of or below `low_right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
	pub up_left: (u32, u32),
	pub low_right: (u32, u32),
}

impl Region {
	pub fn new(up_left: (u32, u32), low_right: (u32, u32)) -> Self {
		assert!(up_left.0 <= low_right.0 && up_left.1 <= low_right.1,
			"malformed region {:?}..{:?}", up_left, low_right);
		Region { up_left, low_right }
	}

	pub fn width(&self) -> u32 {
		self.low_right.0 - self.up_left.0 + 1
	}

	pub fn height(&self) -> u32 {
		self.low_right.1 - self.up_left.1 + 1
	}

	/// Number of pixels covered.
	pub fn area(&self) -> u64 {
		self.width() as u64 * self.height() as u64
	}

	pub fn is_single_pixel(&self) -> bool {
		self.up_left == self.low_right
	}
}

/// One of the four child slots of a node, named after the corner
/// it renders in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
	NW = 0,
	NE = 1,
	SW = 2,
	SE = 3,
}

impl Quadrant {
	pub const ALL: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];
}

/// Node in a quadtree for storing an image.
///
/// May contain subnodes (branch node) or no subnodes and just a color
/// (leaf node). Any of the four child slots may be empty; a single-pixel
/// wide or tall region has nothing to put in two of them.
///
/// It must always contain a color: the pixel itself for a leaf built from
/// an image, the area-weighted average of the children otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadtreeNode {
	pub region: Region,
	pub color: RgbaPixel,
	pub sections: [Option<Box<QuadtreeNode>>; 4],
}

impl QuadtreeNode {
	pub fn leaf(region: Region, color: RgbaPixel) -> Self {
		QuadtreeNode { region, color, sections: [None, None, None, None] }
	}

	/// Recursively builds the smallest quadtree covering `region` of `img`.
	///
	/// The region is halved along both axes; when a side has odd length the
	/// extra row or column goes to the upper/left half, so NW always spans
	/// `up_left..=(mid_x, mid_y)`. A single-column region gets no eastern
	/// children and a single-row region gets no southern ones.
	pub fn build<I: SourceImage + ?Sized>(img: &I, region: Region) -> Self {
		let Region { up_left: ul, low_right: lr } = region;
		if ul == lr {
			return QuadtreeNode::leaf(region, img.pixel(ul.0, ul.1));
		}

		let mid_x = ul.0 + (lr.0 - ul.0) / 2;
		let mid_y = ul.1 + (lr.1 - ul.1) / 2;

		let mut sections: [Option<Box<QuadtreeNode>>; 4] = [None, None, None, None];
		let mut sub = |q: Quadrant, ul: (u32, u32), lr: (u32, u32)| {
			sections[q as usize] = Some(Box::new(QuadtreeNode::build(img, Region::new(ul, lr))));
		};
		sub(Quadrant::NW, ul, (mid_x, mid_y));
		if lr.0 == ul.0 {
			sub(Quadrant::SW, (ul.0, mid_y + 1), (mid_x, lr.1));
		} else {
			sub(Quadrant::NE, (mid_x + 1, ul.1), (lr.0, mid_y));
			if ul.1 != lr.1 {
				sub(Quadrant::SW, (ul.0, mid_y + 1), (mid_x, lr.1));
				sub(Quadrant::SE, (mid_x + 1, mid_y + 1), lr);
			}
		}

		let mut sum = WeightedSum::default();
		for section in sections.iter().flatten() {
			sum.add(&section.color, section.region.area());
		}
		debug_assert_eq!(sum.area(), region.area());
		QuadtreeNode { region, color: sum.average(), sections }
	}

	pub fn is_leaf(&self) -> bool {
		self.sections.iter().all(Option::is_none)
	}

	pub fn section(&self, q: Quadrant) -> Option<&QuadtreeNode> {
		self.sections[q as usize].as_deref()
	}

	/// Present children, in NW, NE, SW, SE order.
	pub fn children(&self) -> impl Iterator<Item = &QuadtreeNode> {
		self.sections.iter().flatten().map(|s| &**s)
	}

	pub fn count_nodes(&self) -> usize {
		1 + self.children().map(QuadtreeNode::count_nodes).sum::<usize>()
	}

	pub fn count_leaves(&self) -> usize {
		if self.is_leaf() {
			1
		} else {
			self.children().map(QuadtreeNode::count_leaves).sum()
		}
	}

	/// Calls `f` on every leaf below (or at) this node, depth first.
	pub fn for_each_leaf<F: FnMut(&QuadtreeNode)>(&self, f: &mut F) {
		if self.is_leaf() {
			f(self);
		} else {
			for section in self.children() {
				section.for_each_leaf(f);
			}
		}
	}
}

pub mod image;
pub mod transform;

#[cfg(test)]
mod tests {
	use super::*;

	fn gray(w: u32, h: u32) -> ::image::RgbaImage {
		::image::RgbaImage::from_fn(w, h, |x, y| ::image::Rgba([(x + y * w) as u8, 0, 0, 255]))
	}

	fn full(img: &::image::RgbaImage) -> Region {
		Region::new((0, 0), (img.width() - 1, img.height() - 1))
	}

	#[test]
	fn single_pixel_is_leaf() {
		let img = gray(1, 1);
		let node = QuadtreeNode::build(&img, full(&img));
		assert!(node.is_leaf());
		assert_eq!(node.count_nodes(), 1);
	}

	#[test]
	fn odd_split_favours_upper_left() {
		let img = gray(3, 3);
		let node = QuadtreeNode::build(&img, full(&img));
		let nw = node.section(Quadrant::NW).unwrap();
		assert_eq!(nw.region, Region::new((0, 0), (1, 1)));
		assert_eq!(node.section(Quadrant::NE).unwrap().region, Region::new((2, 0), (2, 1)));
		assert_eq!(node.section(Quadrant::SW).unwrap().region, Region::new((0, 2), (1, 2)));
		assert_eq!(node.section(Quadrant::SE).unwrap().region, Region::new((2, 2), (2, 2)));
	}

	#[test]
	fn single_column_has_no_eastern_children() {
		let img = gray(1, 3);
		let node = QuadtreeNode::build(&img, full(&img));
		assert!(node.section(Quadrant::NW).is_some());
		assert!(node.section(Quadrant::SW).is_some());
		assert!(node.section(Quadrant::NE).is_none());
		assert!(node.section(Quadrant::SE).is_none());
		assert_eq!(node.section(Quadrant::NW).unwrap().region, Region::new((0, 0), (0, 1)));
		assert_eq!(node.section(Quadrant::SW).unwrap().region, Region::new((0, 2), (0, 2)));
	}

	#[test]
	fn single_row_has_no_southern_children() {
		let img = gray(3, 1);
		let node = QuadtreeNode::build(&img, full(&img));
		assert!(node.section(Quadrant::NW).is_some());
		assert!(node.section(Quadrant::NE).is_some());
		assert!(node.section(Quadrant::SW).is_none());
		assert!(node.section(Quadrant::SE).is_none());
	}

	#[test]
	fn average_is_area_weighted() {
		// Row of 3: NW covers x 0..=1 (values 0 and 1, average 0), NE is x=2.
		let img = ::image::RgbaImage::from_fn(3, 1, |x, _| ::image::Rgba([[0, 1, 90][x as usize], 0, 0, 255]));
		let node = QuadtreeNode::build(&img, full(&img));
		assert_eq!(node.section(Quadrant::NW).unwrap().color.r, 0);
		// (0 * 2 + 90 * 1) / 3
		assert_eq!(node.color.r, 30);
		assert_eq!(node.color.a, 1.);
	}

	#[test]
	fn every_pixel_becomes_a_leaf() {
		let img = gray(5, 7);
		let node = QuadtreeNode::build(&img, full(&img));
		assert_eq!(node.count_leaves(), 35);
		let mut seen = 0;
		node.for_each_leaf(&mut |leaf| {
			assert!(leaf.region.is_single_pixel());
			let (x, y) = leaf.region.up_left;
			assert_eq!(leaf.color.r as u32, x + y * 5);
			seen += 1;
		});
		assert_eq!(seen, 35);
	}

	#[test]
	#[should_panic]
	fn inverted_region_is_rejected() {
		Region::new((2, 0), (1, 0));
	}
}
