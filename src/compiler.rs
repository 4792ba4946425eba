use std::{fs, io::Read, path::Path};

use anyhow::Context;
use log::{debug, info};

use crate::{
	LogoError, config::CompileOptions, emitter::Program, parser::Parser, scanner::Scanner, symtable::SymbolTable,
};

/// Compiler is the entry point of the turtle compiler.
#[derive(Debug, Default, Clone)]
pub struct Compiler {
	options: CompileOptions,
}

impl Compiler {
	pub fn new(options: CompileOptions) -> Self { Self { options } }

	pub fn options(&self) -> &CompileOptions { &self.options }

	/// Compile the source file at `path`.
	pub fn compile_file<P: AsRef<Path>>(&self, path: P) -> Result<Program, LogoError> {
		let path = path.as_ref();
		let source = fs::read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		info!("Compiling {}", path.display());
		self.compile(&source)
	}

	/// Read everything from `reader`, then compile it.
	pub fn compile_reader<R: Read>(&self, mut reader: R) -> Result<Program, LogoError> {
		let mut source = String::new();
		reader.read_to_string(&mut source).context("Failed read source")?;
		self.compile(&source)
	}

	/// Compile source text. Every call starts from a fresh symbol table and
	/// label counter.
	pub fn compile(&self, source: &str) -> Result<Program, LogoError> {
		let symbols = SymbolTable::with_builtins(&self.options);
		let parsed = Parser::new(Scanner::new(source), symbols).parse()?;
		debug!("Compiled with {} lexical diagnostics", parsed.diagnostics.len());
		Ok(Program::new(parsed, self.options))
	}

	/// Write assembled text to `path`.
	pub fn write_output<P: AsRef<Path>>(&self, path: P, program: &Program) -> Result<(), LogoError> {
		let path = path.as_ref();
		fs::write(path, program.assemble()).with_context(|| format!("Failed write output file {}", path.display()))?;
		info!("Wrote {}", path.display());
		Ok(())
	}
}
