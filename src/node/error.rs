use thiserror::Error;

/// Reason why an image couldn't be turned into a quadtree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
	/// The image has no pixels, so there is no region to decompose.
	#[error("image has no pixels ({width}x{height})")]
	EmptyImage { width: u32, height: u32 },
}
