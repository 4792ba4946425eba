//! The `Scanner` uses the lexical grammar, its alphabet is characters.
//! The `Parser` uses the syntactic grammar, its alphabet is tokens, and every
//! production it recognises is handed to a [`CodeGen`] action right away, so
//! no syntax tree is ever built.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Term|+ -|Left
//! Factor|* /|Left
//! Power|^|Left
//! Group|( )|
//!
//! Grammar:
//!
//! ``` BNF
//! program      → statement statement* ;
//! statement    → IDENTIFIER "=" value
//!              | "TO" IDENTIFIER COLON_ID* statement* "END"
//!              | "WHILE" "(" condition ")" statement* "END"
//!              | "IF" "(" condition ")" "THEN" statement* ( "ELSE" statement* )? "END"
//!              | IDENTIFIER argument*
//!              | value
//!              | condition ;
//! condition    → comparison ( ( "AND" | "OR" ) comparison )* ;
//! comparison   → value ( "==" | "<>" | ">" | ">=" | "<" | "<=" ) value ;
//! value        → term ;
//! term         → factor ( ( "+" | "-" ) factor )* ;
//! factor       → power ( ( "*" | "/" ) power )* ;
//! power        → primary ( "^" primary )* ;
//! primary      → NUMBER | COLON_ID | RETURN_NUMBER | IDENTIFIER | "(" value ")" ;
//! argument     → value                  (not starting with IDENTIFIER)
//! ```
//!
//! Procedure calls take their arguments without parentheses, so a plain name
//! cannot open an argument: `FORWARD 10 RIGHT 90` is two calls.

mod expression;
mod stream;

use log::debug;
use stream::TokenStream;

use crate::{
	codegen::{CodeGen, instruction::Code},
	error::{
		parser::{ParseError, ParseErrorType, ParserError},
		scanner::ScanError,
	},
	scanner::{Scanner, Token, TokenType::{self, *}},
	symtable::SymbolTable,
};

/// What a successful parse hands to the emitter.
pub struct Parsed {
	/// Top-level statement fragments in source order, declarations excluded.
	pub statements:  Vec<Code>,
	pub symbols:     SymbolTable,
	pub diagnostics: Vec<ScanError>,
}

pub struct Parser<'a> {
	tokens:  TokenStream<'a>,
	codegen: CodeGen,
}

impl<'a> Parser<'a> {
	pub fn new(scanner: Scanner<'a>, symbols: SymbolTable) -> Self {
		Self { tokens: TokenStream::new(scanner), codegen: CodeGen::new(symbols) }
	}

	/// Parse the whole program.
	pub fn parse(mut self) -> Result<Parsed, ParserError> {
		let statements = self.program()?;
		debug!("Parsed {} top-level statements", statements.len());
		Ok(Parsed { statements, symbols: self.codegen.into_symbols(), diagnostics: self.tokens.into_diagnostics() })
	}

	/// A program holds at least one statement.
	fn program(&mut self) -> Result<Vec<Code>, ParserError> {
		let mut statements = Vec::new();
		loop {
			let code = self.statement()?;
			if !code.is_empty() {
				statements.push(code);
			}
			if matches!(self.tokens.peek().r#type, Eof) {
				return Ok(statements);
			}
		}
	}

	/// Statements up to, not including, one of the terminators.
	fn block(&mut self, terminators: &[TokenType<'a>]) -> Result<Vec<Code>, ParserError> {
		let mut statements = Vec::new();
		while !terminators.contains(&self.tokens.peek().r#type) {
			let code = self.statement()?;
			if !code.is_empty() {
				statements.push(code);
			}
		}
		Ok(statements)
	}

	fn statement(&mut self) -> Result<Code, ParserError> {
		match self.tokens.peek().r#type.clone() {
			To => self.declaration(),
			While => self.while_statement(),
			If => self.if_statement(),
			Identifier(name) => {
				let next = self.tokens.peek_nth(1).r#type.clone();
				if matches!(next, Equal) {
					self.assignment(name)
				} else if next.is_arithmetic() || next.is_relational() {
					self.expression_statement()
				} else {
					self.procedure_call(name)
				}
			}
			Number(_) | ColonIdentifier(_) | ValueBuiltin(_) | LeftParen => self.expression_statement(),
			_ => Err(Self::unexpected(self.tokens.advance()).into()),
		}
	}

	/// A value, or a condition when a relational operator follows it.
	fn expression_statement(&mut self) -> Result<Code, ParserError> {
		let line = self.tokens.peek().line;
		let value = self.value()?;
		if !self.tokens.peek().r#type.is_relational() {
			return Ok(value);
		}
		let first = self.comparison_from(value)?;
		let condition = self.condition_tail(line, first)?;
		Ok(self.codegen.condition_statement(condition))
	}

	/// `name = value`
	fn assignment(&mut self, name: &str) -> Result<Code, ParserError> {
		self.tokens.advance(); // name
		self.tokens.advance(); // =
		let value = self.value()?;
		Ok(self.codegen.assignment(name, value)?)
	}

	/// `TO name :param… statement… END`
	fn declaration(&mut self) -> Result<Code, ParserError> {
		self.tokens.advance(); // TO
		let token = self.tokens.advance();
		let Identifier(name) = token.r#type else {
			return Err(Self::unexpected(token).into());
		};
		let mut parameters = Vec::new();
		while let ColonIdentifier(parameter) = self.tokens.peek().r#type.clone() {
			parameters.push(parameter);
			self.tokens.advance();
		}
		let body = self.block(&[End, Eof])?;
		self.expect(End)?;
		Ok(self.codegen.declaration(name, &parameters, body)?)
	}

	/// `name argument…`
	fn procedure_call(&mut self, name: &str) -> Result<Code, ParserError> {
		self.tokens.advance(); // name
		let mut arguments = Vec::new();
		while matches!(self.tokens.peek().r#type, Number(_) | ColonIdentifier(_) | ValueBuiltin(_) | LeftParen) {
			arguments.push(self.value()?);
		}
		Ok(self.codegen.call(name, arguments))
	}

	/// `WHILE ( condition ) statement… END`
	fn while_statement(&mut self) -> Result<Code, ParserError> {
		self.tokens.advance(); // WHILE
		let condition = self.parenthesized_condition()?;
		let body = self.block(&[End, Eof])?;
		self.expect(End)?;
		Ok(self.codegen.while_loop(condition, body))
	}

	/// `IF ( condition ) THEN statement… [ELSE statement…] END`
	fn if_statement(&mut self) -> Result<Code, ParserError> {
		self.tokens.advance(); // IF
		let condition = self.parenthesized_condition()?;
		self.expect(Then)?;
		let then_body = self.block(&[Else, End, Eof])?;
		if matches!(self.tokens.peek().r#type, Else) {
			self.tokens.advance();
			let else_body = self.block(&[End, Eof])?;
			self.expect(End)?;
			return Ok(self.codegen.if_else(condition, then_body, else_body));
		}
		self.expect(End)?;
		Ok(self.codegen.if_then(condition, then_body))
	}

	/// Consume a token of the given type or fail on whatever is there.
	fn expect(&mut self, expected: TokenType<'a>) -> Result<Token<'a>, ParserError> {
		let token = self.tokens.advance();
		if token.r#type == expected {
			Ok(token)
		} else {
			Err(Self::unexpected(token).into())
		}
	}

	fn unexpected(token: Token<'_>) -> ParseError {
		let r#type = match token.r#type {
			Eof => ParseErrorType::UnexpectedEof,
			_ => ParseErrorType::UnexpectedToken { kind: token.r#type.to_string(), lexeme: token.lexeme.to_string() },
		};
		ParseError::new(token.line, r#type)
	}
}
