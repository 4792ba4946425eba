//! Compilation settings.

/// Initial turtle pose and canvas size, written to `.INIT` and used by `HOME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
	pub origin_x: i64,
	pub origin_y: i64,
	pub width:    i64,
	pub height:   i64,
}

impl Default for CompileOptions {
	fn default() -> Self { Self { origin_x: 1, origin_y: 1, width: 100, height: 100 } }
}

impl CompileOptions {
	/// The operands of the `.INIT` directive.
	pub fn init_directive(&self) -> String {
		format!(".INIT {} {} {} {}", self.origin_x, self.origin_y, self.width, self.height)
	}
}
