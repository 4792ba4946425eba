//! Final assembly of a compiled program.

use std::fmt;

use crate::{
	codegen::instruction::{Code, Instruction},
	config::CompileOptions,
	error::scanner::ScanError,
	parser::Parsed,
	symtable::{Category, SymbolTable},
};

/// Entry block the VM starts in.
pub const MAIN: &str = "__main__";

/// A successfully compiled program.
pub struct Program {
	statements:  Vec<Code>,
	symbols:     SymbolTable,
	diagnostics: Vec<ScanError>,
	options:     CompileOptions,
}

impl Program {
	pub(crate) fn new(parsed: Parsed, options: CompileOptions) -> Self {
		let Parsed { statements, symbols, diagnostics } = parsed;
		Self { statements, symbols, diagnostics, options }
	}

	/// Top-level statement fragments in source order.
	pub fn statements(&self) -> &[Code] { &self.statements }

	pub fn symbols(&self) -> &SymbolTable { &self.symbols }

	/// Lexical errors reported while compiling, none of them stopped the run.
	pub fn diagnostics(&self) -> &[ScanError] { &self.diagnostics }

	/// Render the program as VM assembly.
	pub fn assemble(&self) -> String { self.to_string() }

	fn main_block(&self) -> Code {
		let mut code = Code::new().then(Instruction::Def(MAIN.to_string()));
		self.statements.iter().cloned().for_each(|statement| code.append(statement));
		code
	}
}

impl fmt::Display for Program {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, ".START {MAIN}\n")?;
		writeln!(f, "{}\n", self.options.init_directive())?;

		let variables = self.symbols.list_by_category(Category::Variable);
		if !variables.is_empty() {
			writeln!(f, ".DATA")?;
			for name in variables {
				writeln!(f, "{name} 0")?;
			}
			writeln!(f)?;
		}

		writeln!(f, ".CODE\n")?;
		writeln!(f, "{}\n", self.main_block())?;
		writeln!(f, "{}\n", Instruction::Halt)?;

		for name in self.symbols.list_by_category(Category::UserProcedure) {
			if let Some(code) = self.symbols.lookup(name).and_then(|symbol| symbol.code.as_ref()) {
				writeln!(f, "{code}")?;
			}
		}
		Ok(())
	}
}
