/// A color sample: three integer channels and a continuous alpha channel.
///
/// Alpha is kept as a fraction in `[0.0, 1.0]` so that averaging it over
/// large regions doesn't lose precision the way the integer channels do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaPixel {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl RgbaPixel {
	pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
		RgbaPixel { r, g, b, a }
	}

	/// Euclidean distance in RGBA space, with alpha rescaled to the
	/// 0-255 range of the other channels.
	pub fn distance_to(&self, other: &RgbaPixel) -> f64 {
		let dr = self.r as f64 - other.r as f64;
		let dg = self.g as f64 - other.g as f64;
		let db = self.b as f64 - other.b as f64;
		let da = (self.a - other.a) * 255.;
		(dr * dr + dg * dg + db * db + da * da).sqrt()
	}
}

impl Default for RgbaPixel {
	fn default() -> Self {
		RgbaPixel::new(0, 0, 0, 1.)
	}
}

impl From<image::Rgba<u8>> for RgbaPixel {
	fn from(c: image::Rgba<u8>) -> Self {
		RgbaPixel::new(c.0[0], c.0[1], c.0[2], c.0[3] as f64 / 255.)
	}
}

impl From<RgbaPixel> for image::Rgba<u8> {
	fn from(p: RgbaPixel) -> Self {
		let a = (p.a * 255.).round().max(0.).min(255.) as u8;
		image::Rgba::<u8>([p.r, p.g, p.b, a])
	}
}

/// Anything a quadtree can be built from.
pub trait SourceImage {
	fn width(&self) -> u32;
	fn height(&self) -> u32;
	/// Color at `(x, y)`; both coordinates are in bounds by contract.
	fn pixel(&self, x: u32, y: u32) -> RgbaPixel;
}

impl SourceImage for image::RgbaImage {
	fn width(&self) -> u32 {
		image::RgbaImage::width(self)
	}
	fn height(&self) -> u32 {
		image::RgbaImage::height(self)
	}
	fn pixel(&self, x: u32, y: u32) -> RgbaPixel {
		(*self.get_pixel(x, y)).into()
	}
}

/// Running area-weighted sum of color samples.
///
/// Integer channels are divided with truncation at the end, alpha
/// with real division.
#[derive(Debug, Default)]
pub struct WeightedSum {
	r: u64,
	g: u64,
	b: u64,
	a: f64,
	area: u64,
}

impl WeightedSum {
	pub fn add(&mut self, c: &RgbaPixel, area: u64) {
		self.r += c.r as u64 * area;
		self.g += c.g as u64 * area;
		self.b += c.b as u64 * area;
		self.a += c.a * area as f64;
		self.area += area;
	}

	/// Total weight added so far.
	pub fn area(&self) -> u64 {
		self.area
	}

	/// Panics if nothing has been added.
	pub fn average(&self) -> RgbaPixel {
		assert!(self.area > 0, "average of an empty set of samples");
		RgbaPixel::new(
			(self.r / self.area) as u8,
			(self.g / self.area) as u8,
			(self.b / self.area) as u8,
			self.a / self.area as f64,
		)
	}
}
