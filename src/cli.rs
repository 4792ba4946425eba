use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::CompileOptions;

#[derive(Parser, Debug)]
#[command(
	name = "logoc",
	version,
	about = "Compile turtle programs to stack-machine assembly",
	after_long_help = "Reads standard input when no input file is given."
)]
pub struct Cli {
	/// Input file
	pub input:    Option<PathBuf>,
	/// Where the assembly is written
	#[arg(short, long, default_value = "output.lasm")]
	pub output:   PathBuf,
	/// Initial turtle x position
	#[arg(long, default_value_t = 1)]
	pub origin_x: i64,
	/// Initial turtle y position
	#[arg(long, default_value_t = 1)]
	pub origin_y: i64,
	/// Canvas width
	#[arg(long, default_value_t = 100)]
	pub width:    i64,
	/// Canvas height
	#[arg(long, default_value_t = 100)]
	pub height:   i64,
	/// More logging, repeat for more detail
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose:  u8,
	/// Do not echo the assembly, log errors only
	#[arg(short, long)]
	pub quiet:    bool,
}

impl Cli {
	pub fn options(&self) -> CompileOptions {
		CompileOptions { origin_x: self.origin_x, origin_y: self.origin_y, width: self.width, height: self.height }
	}

	pub fn log_level(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Error;
		}
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let cli = Cli::parse_from(["logoc"]);
		assert_eq!(cli.input, None);
		assert_eq!(cli.output, PathBuf::from("output.lasm"));
		assert_eq!(cli.options(), CompileOptions::default());
		assert_eq!(cli.log_level(), LevelFilter::Warn);
	}

	#[test]
	fn flags() {
		let cli = Cli::parse_from([
			"logoc",
			"square.logo",
			"-o",
			"square.lasm",
			"--origin-x",
			"50",
			"--width",
			"640",
			"-vv",
		]);
		assert_eq!(cli.input, Some(PathBuf::from("square.logo")));
		assert_eq!(cli.output, PathBuf::from("square.lasm"));
		assert_eq!(cli.options(), CompileOptions { origin_x: 50, width: 640, ..CompileOptions::default() });
		assert_eq!(cli.log_level(), LevelFilter::Debug);
		assert_eq!(Cli::parse_from(["logoc", "-q", "-v"]).log_level(), LevelFilter::Error);
	}
}
