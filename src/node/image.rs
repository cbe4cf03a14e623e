use super::QuadtreeNode;

impl QuadtreeNode {
	/// Draws this node's leaves into `img`, each leaf's region blown up by
	/// `scale` in both directions and filled with the leaf's color.
	///
	/// Absent sections draw nothing; their area belongs to a sibling.
	pub fn to_image(&self, img: &mut image::RgbaImage, scale: u32) {
		if self.is_leaf() {
			let c: image::Rgba<u8> = self.color.into();
			let (x0, y0) = (self.region.up_left.0 * scale, self.region.up_left.1 * scale);
			let (x1, y1) = ((self.region.low_right.0 + 1) * scale, (self.region.low_right.1 + 1) * scale);
			for row in y0..y1 {
				for col in x0..x1 {
					img.put_pixel(col, row, c);
				}
			}
		} else {
			for section in self.children() {
				section.to_image(img, scale);
			}
		}
	}
}
