pub mod node;
pub mod tree;

pub use node::{Quadrant, QuadtreeNode, Region};
pub use node::error::BuildError;
pub use node::pixel::{RgbaPixel, SourceImage};
pub use tree::QuadTree;

use log::trace;

impl node::QuadtreeNode {

	/// "Prunes" the tree by collapsing subtrees into leaves.
	///
	/// A subtree is collapsed when every one of its leaves is within
	/// `tolerance` of the subtree root's own color; otherwise each child
	/// is considered on its own. The collapsed node keeps its color.
	pub fn prune(&mut self, tolerance: f64) {
		if self.is_leaf() {
			return;
		}
		let avg = self.color;
		if self.leaves_within(&avg, tolerance) {
			trace!("collapsing {:?}", self.region);
			self.sections = [None, None, None, None];
		} else {
			self.sections.iter_mut().flatten().for_each(|s| s.prune(tolerance));
		}
	}

	/// Whether every leaf under this node is at most `tolerance` away
	/// from `avg`. Empty sections don't count against it.
	pub fn leaves_within(&self, avg: &RgbaPixel, tolerance: f64) -> bool {
		if self.is_leaf() {
			self.color.distance_to(avg) <= tolerance
		} else {
			self.children().all(|s| s.leaves_within(avg, tolerance))
		}
	}
}
