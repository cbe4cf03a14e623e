use bitvec::prelude::*;
use log::debug;

use crate::node::error::BuildError;
use crate::node::pixel::SourceImage;
use crate::node::{QuadtreeNode, Region};

/// A region quadtree over a whole image.
///
/// Cloning deep-copies every node; two trees never share structure.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadTree {
	root: QuadtreeNode,
	width: u32,
	height: u32,
}

impl QuadTree {
	/// Decomposes `img` down to single pixels.
	///
	/// Every leaf of the result is one pixel of `img`, and every branch holds
	/// the area-weighted average color of the region it covers.
	pub fn from_image<I: SourceImage + ?Sized>(img: &I) -> Result<Self, BuildError> {
		let (width, height) = (img.width(), img.height());
		if width == 0 || height == 0 {
			return Err(BuildError::EmptyImage { width, height });
		}
		let root = QuadtreeNode::build(img, Region::new((0, 0), (width - 1, height - 1)));
		debug!("built {}x{} quadtree with {} nodes", width, height, root.count_nodes());
		Ok(QuadTree { root, width, height })
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn root(&self) -> &QuadtreeNode {
		&self.root
	}

	pub fn count_nodes(&self) -> usize {
		self.root.count_nodes()
	}

	pub fn count_leaves(&self) -> usize {
		self.root.count_leaves()
	}

	/// Renders the tree into a new image `scale` times the size of the
	/// original. No interpolation is done; each leaf becomes a flat block.
	///
	/// Panics if `scale` is zero.
	pub fn render(&self, scale: u32) -> image::RgbaImage {
		assert!(scale > 0, "render scale must be at least 1");
		let mut img = image::RgbaImage::new(self.width * scale, self.height * scale);
		self.root.to_image(&mut img, scale);
		img
	}

	/// Collapses every subtree, as close to the root as possible, whose
	/// leaves are all within `tolerance` of the subtree root's color.
	///
	/// Collapsed nodes keep their stored average. Pruning a second time is
	/// allowed; it only tests the leaves left by the first pass, so it can
	/// collapse a node whose children were each collapsed close enough to it.
	pub fn prune(&mut self, tolerance: f64) {
		let before = self.count_nodes();
		self.root.prune(tolerance);
		debug!("pruned at tolerance {}: {} -> {} nodes", tolerance, before, self.count_nodes());
	}

	/// Mirrors the tree so it renders flipped across the vertical axis.
	pub fn flip_horizontal(&mut self) {
		self.root.flip_horizontal(self.width);
		debug!("flipped {}x{} quadtree", self.width, self.height);
	}

	/// Rotates the tree so it renders turned 90 degrees counter-clockwise.
	/// Width and height trade places.
	pub fn rotate_ccw(&mut self) {
		std::mem::swap(&mut self.width, &mut self.height);
		self.root.rotate_ccw(self.height);
		debug!("rotated quadtree, now {}x{}", self.width, self.height);
	}

	/// Checks that the leaf regions tile the image exactly: every pixel is
	/// covered by exactly one leaf and no leaf falls outside the image.
	pub fn is_partition(&self) -> bool {
		let (w, h) = (self.width as usize, self.height as usize);
		let mut covered = bitvec![0; w * h];
		let mut ok = true;
		self.root.for_each_leaf(&mut |leaf| {
			let Region { up_left: ul, low_right: lr } = leaf.region;
			if lr.0 as usize >= w || lr.1 as usize >= h {
				ok = false;
				return;
			}
			for y in ul.1 as usize..=lr.1 as usize {
				for x in ul.0 as usize..=lr.0 as usize {
					if covered.replace(y * w + x, true) {
						ok = false;
					}
				}
			}
		});
		ok && covered.all()
	}
}
