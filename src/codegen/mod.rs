//! Semantic actions of the grammar.
//!
//! The parser calls one action per reduced production, inner productions
//! first, and threads the returned [`Code`] fragments up to the parent. The
//! actions resolve names in the [`SymbolTable`] and declare the ones they
//! meet for the first time.
//!
//! Values use a two-operand stack discipline: `a op b` is the code of `a`,
//! the code of `b`, then the operator. Precedence is settled by the parser
//! before an action fires.

mod control;
pub mod instruction;

use instruction::{Code, Instruction, Jump, Number};
use log::{trace, warn};

use crate::{
	error::symtable::SymbolError,
	scanner::ValueBuiltin,
	symtable::{Category, SymbolTable, SymbolUpdate},
};

/// Arithmetic operators, all binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
	Add,
	Sub,
	Mul,
	Div,
	Pow,
}

impl ArithmeticOp {
	pub fn instruction(self) -> Instruction {
		match self {
			ArithmeticOp::Add => Instruction::Add,
			ArithmeticOp::Sub => Instruction::Sub,
			ArithmeticOp::Mul => Instruction::Mul,
			ArithmeticOp::Div => Instruction::Div,
			ArithmeticOp::Pow => Instruction::Pow,
		}
	}
}

/// Relational operators of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
	Equal,
	NotEqual,
	Greater,
	GreaterEqual,
	Less,
	LessEqual,
}

impl Relation {
	/// `>=` and `<=` jump exactly like `>` and `<`.
	pub fn jumps(self) -> JumpTable {
		use Jump::*;
		match self {
			Relation::Equal => JumpTable { on_true: Jz, on_false: Jnz },
			Relation::NotEqual => JumpTable { on_true: Jnz, on_false: Jz },
			Relation::Greater | Relation::GreaterEqual => JumpTable { on_true: Jmore, on_false: Jless },
			Relation::Less | Relation::LessEqual => JumpTable { on_true: Jless, on_false: Jmore },
		}
	}
}

/// Conditional jumps taking a branch when a comparison holds or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTable {
	pub on_true:  Jump,
	pub on_false: Jump,
}

/// The code testing one relation and the jumps that act on its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
	pub test:  Code,
	pub jumps: JumpTable,
}

/// Comparisons joined by `AND`/`OR`.
///
/// Joining only concatenates, neither operator adds short-circuit code and the
/// two cannot be told apart afterwards. Branches act on the leading
/// comparison alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
	pub line:        usize,
	pub comparisons: Vec<Comparison>,
}

/// Code generator state for one compilation run.
pub struct CodeGen {
	symbols:    SymbolTable,
	next_label: usize,
}

impl CodeGen {
	pub fn new(symbols: SymbolTable) -> Self { Self { symbols, next_label: 0 } }

	#[cfg(test)]
	pub fn symbols(&self) -> &SymbolTable { &self.symbols }

	pub fn into_symbols(self) -> SymbolTable { self.symbols }

	/// `PUSH n`
	pub fn number(&self, n: i64) -> Code { Code::from(vec![Instruction::Push(Number::Literal(n))]) }

	/// `:name`, declares the variable on first sight.
	pub fn variable(&mut self, name: &str) -> Code {
		self.symbols.declare(name, Category::Variable);
		Code::from(vec![Instruction::Load(name.to_string())])
	}

	pub fn value_builtin(&self, builtin: ValueBuiltin) -> Code {
		Code::from(vec![match builtin {
			ValueBuiltin::Random => Instruction::Rand,
			ValueBuiltin::TypeIn => Instruction::Call("READ".into()),
		}])
	}

	/// A plain name used as a value.
	pub fn identifier_value(&mut self, name: &str) -> Code {
		self.symbols.declare(name, Category::Variable);
		match self.symbols.lookup(name) {
			Some(symbol) if symbol.category == Category::BuiltinProcedure => symbol.code.clone().unwrap_or_default(),
			Some(symbol) if symbol.category == Category::UserProcedure => {
				Code::from(vec![Instruction::Call(name.to_string())])
			}
			_ => Code::from(vec![Instruction::Load(name.to_string())]),
		}
	}

	pub fn arithmetic(&self, lhs: Code, op: ArithmeticOp, rhs: Code) -> Code {
		let mut code = lhs;
		code.append(rhs);
		code.then(op.instruction())
	}

	/// `a rel b` tests as `a`, then `CMP b`.
	pub fn comparison(&self, lhs: Code, relation: Relation, rhs: Code) -> Comparison {
		Comparison { test: lhs.then(Instruction::Cmp(rhs)), jumps: relation.jumps() }
	}

	/// `AND` and `OR` both end up here.
	pub fn conjunction(&self, mut lhs: Condition, rhs: Condition) -> Condition {
		lhs.comparisons.extend(rhs.comparisons);
		lhs
	}

	/// A condition used as a statement emits its tests and no jumps.
	pub fn condition_statement(&self, condition: Condition) -> Code {
		condition.comparisons.into_iter().flat_map(|comparison| comparison.test).collect()
	}

	/// The test code and jumps a branch acts on.
	fn branch_on(&self, condition: Condition) -> (Code, JumpTable) {
		if condition.comparisons.len() > 1 {
			warn!(
				"line {}: only the first of {} joined comparisons decides the branch",
				condition.line,
				condition.comparisons.len()
			);
		}
		let Comparison { test, jumps } =
			condition.comparisons.into_iter().next().unwrap_or(Comparison { test: Code::new(), jumps: Relation::Equal.jumps() });
		(test, jumps)
	}

	/// `name = value`, declares `name` as a variable when it is new.
	pub fn assignment(&mut self, name: &str, value: Code) -> Result<Code, SymbolError> {
		self.symbols.declare(name, Category::Variable);
		if let Some(operand) = value.first().and_then(Instruction::operand) {
			self.symbols.update(name, SymbolUpdate::default().last_value(operand))?;
		}
		Ok(value.then(Instruction::Store(name.to_string())))
	}

	/// `TO name :a :b … END` stores the procedure definition in the table and
	/// emits nothing where it stands. Redefining a builtin also drops the code
	/// it pushed ahead of its arguments.
	pub fn declaration(&mut self, name: &str, parameters: &[&str], body: Vec<Code>) -> Result<Code, SymbolError> {
		self.symbols.declare(name, Category::UserProcedure);

		let mut definition = Code::new().then(Instruction::Def(name.to_string()));
		definition.extend(parameters.iter().map(|parameter| Instruction::Store(parameter.to_string())));
		body.into_iter().for_each(|statement| definition.append(statement));
		definition.push(Instruction::Ret);

		trace!("Defined procedure '{name}' with {} parameters", parameters.len());
		let update = SymbolUpdate::default().category(Category::UserProcedure).code(definition).without_code_before();
		self.symbols.update(name, update)?;
		Ok(Code::new())
	}

	/// `name arg…`: builtins expand inline, anything else is called.
	pub fn call(&self, name: &str, arguments: Vec<Code>) -> Code {
		let symbol = self.symbols.lookup(name);
		let mut code = symbol.and_then(|symbol| symbol.code_before.clone()).unwrap_or_default();
		arguments.into_iter().for_each(|argument| code.append(argument));

		match symbol {
			Some(symbol) if symbol.category == Category::BuiltinProcedure => {
				code.append(symbol.code.clone().unwrap_or_default());
			}
			_ => code.push(Instruction::Call(name.to_string())),
		}
		code
	}
}
