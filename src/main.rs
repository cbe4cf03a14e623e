use image::error::ImageError;

use log::{debug, info};

use quadtree_img::QuadTree;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Maps the number of `-v` flags to a default log level.
fn init_logging(verbosity: u64) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// `clap`-based CLI for decomposing an image into a quadtree, transforming
/// it and rendering it back out.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	let clap_matches = clap::App::new("quadtree_img")
		.version(env!("CARGO_PKG_VERSION"))
		.author("vkcz")
		.about("Decomposes an image into a region quadtree, then prunes, flips or rotates it and renders it back.")
		.arg_from_usage("-p, --prune=[TOL] 'Prune subtrees whose leaves are within TOL color distance of their average'")
		.arg_from_usage("-s, --scale=[N] 'Output scale factor; defaults to 1'")
		.arg_from_usage("-f, --flip 'Mirror the image horizontally'")
		.arg_from_usage("-r, --rotate=[N] 'Number of quarter turns counter-clockwise; defaults to 0'")
		.arg_from_usage("-v, --verbose... 'Increase logging verbosity'")
		.arg_from_usage("<INPUT> 'Path to input file'")
		.arg_from_usage("[OUTPUT] 'Path to output file; defaults to INPUT with a .qt.png extension'")
		.get_matches();

	init_logging(clap_matches.occurrences_of("verbose"));

	let (prune, scale, rotate) = (
		match clap_matches.value_of("prune").map(str::parse::<f64>) {
			None => None,
			Some(Ok(t)) if t >= 0. => Some(t),
			Some(_) => error_exit("Prune tolerance must be a non-negative number", 2)
		},
		match clap_matches.value_of("scale").unwrap_or("1").parse::<u32>() {
			Ok(n) if n >= 1 => n,
			_ => error_exit("Scale must be a positive integer", 2)
		},
		match clap_matches.value_of("rotate").unwrap_or("0").parse::<u32>() {
			Ok(n) => n % 4,
			Err(_) => error_exit("Non-numeric value for rotate", 2)
		}
	);

	let input_path = match clap_matches.value_of("INPUT") {
		Some(p) => p,
		None => error_exit("Missing input path", 2)
	};
	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgba8();

	let mut tree = match QuadTree::from_image(&source) {
		Ok(t) => t,
		Err(e) => error_exit(&e.to_string(), 4)
	};
	info!("{}x{} image decomposed into {} nodes", tree.width(), tree.height(), tree.count_nodes());

	if let Some(tolerance) = prune {
		tree.prune(tolerance);
		info!("{} leaves remain after pruning", tree.count_leaves());
	}
	if clap_matches.is_present("flip") {
		tree.flip_horizontal();
	}
	for _ in 0..rotate {
		tree.rotate_ccw();
	}
	debug!("leaves partition the image: {}", tree.is_partition());

	let output = tree.render(scale);
	let default_output = input_path.rsplitn(2, '.').last().unwrap_or(input_path).to_string() + ".qt.png";
	match output.save(clap_matches.value_of("OUTPUT").unwrap_or(&default_output)) {
		Ok(_) => (),
		Err(_) => error_exit("Could not save output", 3)
	}
}
