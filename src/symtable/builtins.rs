//! The builtin procedure catalogue the turtle VM understands.
//!
//! Turn commands are all `MOVE` calls, the direction is a fixed angle pushed
//! in front of the distance.

use crate::{
	codegen::instruction::{Code, Instruction::{self, *}, Number},
	config::CompileOptions,
};

/// Pen flag of `SET`/`UNSET`.
const PEN: u8 = 1;
/// Where `CLEARSCREEN` parks the turtle.
const SCREEN_CENTER: i64 = 50;

pub struct Builtin {
	pub name:        &'static str,
	pub code_before: Option<Code>,
	pub code:        Code,
}

impl Builtin {
	fn new(name: &'static str, code: Vec<Instruction>) -> Self { Self { name, code_before: None, code: code.into() } }

	fn turning(name: &'static str, angle: i64) -> Self {
		Self { name, code_before: Some(vec![push(angle)].into()), code: vec![Call("MOVE".into())].into() }
	}
}

fn push(n: i64) -> Instruction { Push(Number::Immediate(n)) }

/// Every builtin, in the order it is seeded.
pub fn catalogue(options: &CompileOptions) -> Vec<Builtin> {
	let clear_screen = || {
		vec![ClearScreen, Unset(PEN), push(SCREEN_CENTER), push(SCREEN_CENTER), MoveTo, Set(PEN)]
	};

	vec![
		Builtin::new("PRINT", vec![push(1), Call("WRITE".into())]),
		Builtin::new("TYPEIN", vec![Call("READ".into())]),
		Builtin::turning("FO", 0),
		Builtin::turning("FORWARD", 0),
		Builtin::turning("LT", 90),
		Builtin::turning("LEFT", 90),
		Builtin::turning("BK", 180),
		Builtin::turning("BACKWARD", 180),
		Builtin::turning("RIGHT", 270),
		Builtin::turning("RT", 270),
		Builtin::new("PENUP", vec![Unset(PEN)]),
		Builtin::new("PENDOWN", vec![Set(PEN)]),
		Builtin::new("PD", vec![Set(PEN)]),
		Builtin::new("WIPECLEAN", vec![ClearScreen]),
		Builtin::new("WP", vec![ClearScreen]),
		Builtin::new("CLEARSCREEN", clear_screen()),
		Builtin::new("CS", clear_screen()),
		Builtin::new("HOME", vec![Unset(PEN), push(options.origin_x), push(options.origin_y), MoveTo, Set(PEN)]),
		Builtin::new("SETXY", vec![Unset(PEN), MoveTo, Set(PEN)]),
	]
}
