//! Names known to one compilation run.
//!
//! The table doubles as a cache of code fragments: builtins keep their inline
//! expansion here, user procedures their whole `DEF … RET` block.

pub mod builtins;

use std::{collections::HashMap, fmt};

use log::trace;

use crate::{codegen::instruction::Code, config::CompileOptions, error::symtable::SymbolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
	Variable,
	BuiltinProcedure,
	UserProcedure,
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Category::Variable => "variable",
			Category::BuiltinProcedure => "builtin procedure",
			Category::UserProcedure => "user procedure",
		})
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
	pub name:        String,
	pub category:    Category,
	/// Inline expansion of a builtin, or the full definition of a user procedure.
	pub code:        Option<Code>,
	/// Emitted in front of the call arguments.
	pub code_before: Option<Code>,
	/// Operand of the last value assigned to a variable, best effort.
	pub last_value:  Option<String>,
}

impl Symbol {
	fn new(name: &str, category: Category) -> Self {
		Self { name: name.to_string(), category, code: None, code_before: None, last_value: None }
	}
}

/// Fields to merge into an existing symbol, unset fields are left alone.
#[derive(Debug, Default, Clone)]
pub struct SymbolUpdate {
	category:          Option<Category>,
	code:              Option<Code>,
	code_before:       Option<Code>,
	last_value:        Option<String>,
	/// Drop the symbol's `code_before`.
	clear_code_before: bool,
}

impl SymbolUpdate {
	pub fn category(mut self, category: Category) -> Self {
		self.category = Some(category);
		self
	}

	pub fn code(mut self, code: Code) -> Self {
		self.code = Some(code);
		self
	}

	#[cfg(test)]
	pub fn code_before(mut self, code: Code) -> Self {
		self.code_before = Some(code);
		self
	}

	pub fn last_value(mut self, value: String) -> Self {
		self.last_value = Some(value);
		self
	}

	pub fn without_code_before(mut self) -> Self {
		self.clear_code_before = true;
		self.code_before = None;
		self
	}
}

#[derive(Default, Debug, Clone)]
pub struct SymbolTable {
	symbols: HashMap<String, Symbol>,
	/// Names in the order they were first declared.
	order:   Vec<String>,
}

impl SymbolTable {
	pub fn new() -> Self { Self::default() }

	/// A table holding the builtin procedure catalogue.
	pub fn with_builtins(options: &CompileOptions) -> Self {
		let mut table = Self::new();
		for builtin in builtins::catalogue(options) {
			let mut symbol = Symbol::new(builtin.name, Category::BuiltinProcedure);
			symbol.code = Some(builtin.code);
			symbol.code_before = builtin.code_before;
			table.insert(symbol);
		}
		table
	}

	/// Declaring a name that already exists leaves its record untouched.
	pub fn declare(&mut self, name: &str, category: Category) {
		if !self.symbols.contains_key(name) {
			self.insert(Symbol::new(name, category));
		}
	}

	fn insert(&mut self, symbol: Symbol) {
		trace!("Declared '{}' as {}", symbol.name, symbol.category);
		self.order.push(symbol.name.clone());
		self.symbols.insert(symbol.name.clone(), symbol);
	}

	/// Merge fields into an existing symbol.
	pub fn update(&mut self, name: &str, update: SymbolUpdate) -> Result<(), SymbolError> {
		let symbol = self.symbols.get_mut(name).ok_or_else(|| SymbolError::Undeclared(name.to_string()))?;
		let SymbolUpdate { category, code, code_before, last_value, clear_code_before } = update;
		if let Some(category) = category {
			symbol.category = category;
		}
		if code.is_some() {
			symbol.code = code;
		}
		if code_before.is_some() || clear_code_before {
			symbol.code_before = code_before;
		}
		if last_value.is_some() {
			symbol.last_value = last_value;
		}
		Ok(())
	}

	pub fn lookup(&self, name: &str) -> Option<&Symbol> { self.symbols.get(name) }

	/// Names of the given category in first-declared order.
	pub fn list_by_category(&self, category: Category) -> Vec<&str> {
		self.order
			.iter()
			.filter(|name| self.symbols.get(name.as_str()).is_some_and(|symbol| symbol.category == category))
			.map(String::as_str)
			.collect()
	}
}
