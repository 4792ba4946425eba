//! Tagged stack-machine instructions.
//!
//! Generated code stays a list of [`Instruction`]s until emission, where every
//! instruction renders to exactly one line of assembly. The mnemonics are the
//! ones the turtle VM reads.

use std::fmt;

/// Operand of a `PUSH`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// A literal from the source, the VM reads it as a float: `PUSH 10.0`.
	Literal(i64),
	/// A constant baked into the compiler: `PUSH 90`.
	Immediate(i64),
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Literal(n) => {
				// Exponent form from 1e16 up, written with its sign: `1e+16`.
				let text = format!("{:?}", *n as f64);
				match text.split_once('e') {
					Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{mantissa}e+{exponent}"),
					_ => f.write_str(&text),
				}
			}
			Number::Immediate(n) => write!(f, "{n}"),
		}
	}
}

/// Jump mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
	Jz,
	Jnz,
	Jmore,
	Jless,
	/// Unconditional.
	Jp,
}

impl fmt::Display for Jump {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Jump::Jz => "JZ",
			Jump::Jnz => "JNZ",
			Jump::Jmore => "JMORE",
			Jump::Jless => "JLESS",
			Jump::Jp => "JP",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
	While,
	After,
	True,
	EndIf,
	False,
}

/// A branch target, written `:while_3` both where it is defined and where it
/// is jumped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
	pub kind: LabelKind,
	pub id:   usize,
}

impl Label {
	pub fn new(kind: LabelKind, id: usize) -> Self { Self { kind, id } }
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let prefix = match self.kind {
			LabelKind::While => "while",
			LabelKind::After => "after",
			LabelKind::True => "true",
			LabelKind::EndIf => "endif",
			LabelKind::False => "false",
		};
		write!(f, ":{prefix}_{}", self.id)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
	Push(Number),
	Load(String),
	Store(String),
	Add,
	Sub,
	Mul,
	Div,
	Pow,
	/// Compare the top of the stack with the operand code, rendered with every
	/// `PUSH ` removed so the comparison targets the raw operand.
	Cmp(Code),
	Jump(Jump, Label),
	/// Defines a label.
	Mark(Label),
	Call(String),
	Rand,
	Set(u8),
	Unset(u8),
	ClearScreen,
	MoveTo,
	Def(String),
	Ret,
	Halt,
}

impl Instruction {
	/// First operand as written in the assembly, if the instruction has one.
	pub fn operand(&self) -> Option<String> {
		use Instruction::*;
		match self {
			Push(n) => Some(n.to_string()),
			Load(name) | Store(name) | Call(name) | Def(name) => Some(name.clone()),
			Cmp(code) => code.first().and_then(Instruction::operand),
			Jump(_, label) | Mark(label) => Some(label.to_string()),
			Set(flag) | Unset(flag) => Some(flag.to_string()),
			Add | Sub | Mul | Div | Pow | Rand | ClearScreen | MoveTo | Ret | Halt => None,
		}
	}
}

impl fmt::Display for Instruction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Instruction::*;
		match self {
			Push(n) => write!(f, "PUSH {n}"),
			Load(name) => write!(f, "LOAD {name}"),
			Store(name) => write!(f, "STOR {name}"),
			Add => f.write_str("ADD"),
			Sub => f.write_str("SUB"),
			Mul => f.write_str("MUL"),
			Div => f.write_str("DIV"),
			Pow => f.write_str("POW"),
			Cmp(operand) => write!(f, "CMP {}", operand.to_string().replace("PUSH ", "")),
			Jump(jump, label) => write!(f, "{jump} {label}"),
			Mark(label) => write!(f, "{label}"),
			Call(name) => write!(f, "CALL {name}"),
			Rand => f.write_str("RAND"),
			Set(flag) => write!(f, "SET {flag}"),
			Unset(flag) => write!(f, "UNSET {flag}"),
			ClearScreen => f.write_str("CLRSCR"),
			MoveTo => f.write_str("MVTO"),
			Def(name) => write!(f, "DEF {name}:"),
			Ret => f.write_str("RET"),
			Halt => f.write_str("HALT"),
		}
	}
}

/// A fragment of generated code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Code(Vec<Instruction>);

impl Code {
	pub fn new() -> Self { Self::default() }

	pub fn push(&mut self, instruction: Instruction) { self.0.push(instruction) }

	pub fn append(&mut self, mut other: Code) { self.0.append(&mut other.0) }

	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	pub fn len(&self) -> usize { self.0.len() }

	pub fn first(&self) -> Option<&Instruction> { self.0.first() }

	pub fn instructions(&self) -> &[Instruction] { &self.0 }

	/// Builder form of [`Code::push`].
	pub fn then(mut self, instruction: Instruction) -> Self {
		self.push(instruction);
		self
	}
}

impl From<Vec<Instruction>> for Code {
	fn from(instructions: Vec<Instruction>) -> Self { Self(instructions) }
}

impl FromIterator<Instruction> for Code {
	fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

impl Extend<Instruction> for Code {
	fn extend<I: IntoIterator<Item = Instruction>>(&mut self, iter: I) { self.0.extend(iter) }
}

impl IntoIterator for Code {
	type IntoIter = std::vec::IntoIter<Instruction>;
	type Item = Instruction;

	fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl fmt::Display for Code {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, instruction) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str("\n")?;
			}
			write!(f, "{instruction}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::{Instruction::*, *};

	#[test]
	fn render_numbers() {
		assert_eq!(Push(Number::Literal(10)).to_string(), "PUSH 10.0");
		assert_eq!(Push(Number::Literal(-3)).to_string(), "PUSH -3.0");
		assert_eq!(Push(Number::Immediate(90)).to_string(), "PUSH 90");
	}

	#[test]
	fn render_large_literals_with_signed_exponent() {
		assert_eq!(Number::Literal(9_999_999_999_999_998).to_string(), "9999999999999998.0");
		assert_eq!(Number::Literal(10_000_000_000_000_000).to_string(), "1e+16");
		assert_eq!(Number::Literal(-10_000_000_000_000_000).to_string(), "-1e+16");
		assert_eq!(Number::Literal(i64::MAX).to_string(), "9.223372036854776e+18");
	}

	#[test]
	fn render_labels() {
		assert_eq!(Mark(Label::new(LabelKind::While, 0)).to_string(), ":while_0");
		assert_eq!(Jump(super::Jump::Jnz, Label::new(LabelKind::After, 7)).to_string(), "JNZ :after_7");
		assert_eq!(Jump(super::Jump::Jp, Label::new(LabelKind::EndIf, 2)).to_string(), "JP :endif_2");
	}

	#[test]
	fn compare_strips_push() {
		assert_eq!(Cmp(Code::from(vec![Push(Number::Literal(5))])).to_string(), "CMP 5.0");
		assert_eq!(Cmp(Code::from(vec![Load("b".into())])).to_string(), "CMP LOAD b");
		let compound = Code::from(vec![Load("x".into()), Push(Number::Literal(1)), Add]);
		assert_eq!(Cmp(compound).to_string(), "CMP LOAD x\n1.0\nADD");
	}

	#[test]
	fn render_code_one_instruction_per_line() {
		let code = Code::new().then(Def("SQUARE".into())).then(Store("size".into())).then(Ret);
		assert_eq!(code.to_string(), "DEF SQUARE:\nSTOR size\nRET");
		assert_eq!(Code::new().to_string(), "");
	}

	#[test]
	fn first_operand() {
		assert_eq!(Push(Number::Literal(5)).operand().as_deref(), Some("5.0"));
		assert_eq!(Load("x".into()).operand().as_deref(), Some("x"));
		assert_eq!(Rand.operand(), None);
	}
}
