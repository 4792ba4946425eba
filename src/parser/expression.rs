//! Value expressions and conditions.
//!
//! Values are parsed by precedence climbing over the binary operators, all of
//! which associate to the left. The action for `a op b` fires once both
//! operands are complete, so the generated code is already in stack order.

use super::{Parser, ParserError};
use crate::{
	codegen::{ArithmeticOp, Comparison, Condition, Relation, instruction::Code},
	scanner::TokenType::{self, *},
};

/// Binding strength of a binary arithmetic operator, higher binds tighter.
fn precedence(r#type: &TokenType) -> Option<(u8, ArithmeticOp)> {
	match r#type {
		Plus => Some((1, ArithmeticOp::Add)),
		Minus => Some((1, ArithmeticOp::Sub)),
		Star => Some((2, ArithmeticOp::Mul)),
		Slash => Some((2, ArithmeticOp::Div)),
		Caret => Some((3, ArithmeticOp::Pow)),
		_ => None,
	}
}

fn relation_of(r#type: &TokenType) -> Option<Relation> {
	match r#type {
		EqualEqual => Some(Relation::Equal),
		LessGreater => Some(Relation::NotEqual),
		Greater => Some(Relation::Greater),
		GreaterEqual => Some(Relation::GreaterEqual),
		Less => Some(Relation::Less),
		LessEqual => Some(Relation::LessEqual),
		_ => None,
	}
}

impl<'a> Parser<'a> {
	/// Parse a value expression.
	pub(super) fn value(&mut self) -> Result<Code, ParserError> { self.binary(1) }

	/// Parse operators binding at least as tight as `min_precedence`.
	fn binary(&mut self, min_precedence: u8) -> Result<Code, ParserError> {
		let mut lhs = self.primary()?;
		while let Some((strength, op)) = precedence(&self.tokens.peek().r#type) {
			if strength < min_precedence {
				break;
			}
			self.tokens.advance();
			let rhs = self.binary(strength + 1)?;
			lhs = self.codegen.arithmetic(lhs, op, rhs);
		}
		Ok(lhs)
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Code, ParserError> {
		let token = self.tokens.advance();
		match token.r#type {
			Number(n) => Ok(self.codegen.number(n)),
			ColonIdentifier(name) => Ok(self.codegen.variable(name)),
			ValueBuiltin(builtin) => Ok(self.codegen.value_builtin(builtin)),
			Identifier(name) => Ok(self.codegen.identifier_value(name)),
			LeftParen => {
				let value = self.value()?;
				self.expect(RightParen)?;
				Ok(value)
			}
			_ => Err(Self::unexpected(token).into()),
		}
	}

	/// `( condition )`
	pub(super) fn parenthesized_condition(&mut self) -> Result<Condition, ParserError> {
		self.expect(LeftParen)?;
		let line = self.tokens.peek().line;
		let first = self.comparison()?;
		let condition = self.condition_tail(line, first)?;
		self.expect(RightParen)?;
		Ok(condition)
	}

	/// Join further comparisons with `AND` / `OR`.
	pub(super) fn condition_tail(&mut self, line: usize, first: Comparison) -> Result<Condition, ParserError> {
		let mut condition = Condition { line, comparisons: vec![first] };
		while matches!(self.tokens.peek().r#type, And | Or) {
			self.tokens.advance();
			let line = self.tokens.peek().line;
			let next = self.comparison()?;
			condition = self.codegen.conjunction(condition, Condition { line, comparisons: vec![next] });
		}
		Ok(condition)
	}

	fn comparison(&mut self) -> Result<Comparison, ParserError> {
		let lhs = self.value()?;
		self.comparison_from(lhs)
	}

	/// The rest of a comparison whose left operand is already compiled.
	pub(super) fn comparison_from(&mut self, lhs: Code) -> Result<Comparison, ParserError> {
		let token = self.tokens.advance();
		let Some(relation) = relation_of(&token.r#type) else {
			return Err(Self::unexpected(token).into());
		};
		let rhs = self.value()?;
		Ok(self.codegen.comparison(lhs, relation, rhs))
	}
}
