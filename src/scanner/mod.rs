//! Lexical analysis for the turtle language.
//!
//! The scanner is pulled by the parser one token at a time. It never fails:
//! a character outside the lexical grammar is reported and skipped, and
//! scanning carries on with the next one. Newlines only move the line counter,
//! statements have no terminator.
//!
//! Numbers are matched before identifiers, and a finished identifier is then
//! looked up as a reserved word (`IF THEN END ELSE WHILE TO AND OR`) or a
//! value-returning builtin (`RANDOM`, `TYPEIN`). That lookup can only happen
//! once the whole word has been consumed, this is `maximal munch`.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use log::warn;
pub use token::{Token, TokenType, ValueBuiltin};

use crate::error::scanner::{ScanError, ScanErrorType};

/// A scanner for turtle source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line `current` is on so we can produce tokens that know
	/// their location.
	line:        usize,
	/// Lexical errors reported so far
	diagnostics: Vec<ScanError>,
	/// Set once the end marker was handed out
	finished:    bool,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, diagnostics: Vec::new(), finished: false }
	}

	/// The line the scanner is currently on.
	pub fn line(&self) -> usize { self.line }

	pub fn into_diagnostics(self) -> Vec<ScanError> { self.diagnostics }

	/// Scan the next significant token, or `None` once the input is exhausted.
	fn scan_token(&mut self) -> Option<Token<'a>> {
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.lexeme_type() {
				Ok(r#type) if r#type.is_ignored() => {}
				Ok(r#type) => {
					let lexeme = &self.source[self.start..self.cursor];
					return Some(Token::new(r#type, lexeme, self.line));
				}
				Err(error) => self.report(error),
			}
		}
		None
	}

	/// Classify the lexeme starting at `self.start`.
	fn lexeme_type(&mut self) -> Result<TokenType<'a>, ScanError> {
		let Some(next_char) = self.advance() else {
			return Ok(EmptyChar);
		};
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'/' => Slash,
			'^' => Caret,
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else if self.match_next('>') { LessGreater } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			':' if self.peek().is_some_and(is_identifier_start) => self.colon_identifier(),
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => { self.line += 1; NewLine }
			c if c.is_ascii_digit() => self.number()?,
			c if is_identifier_start(c) => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char))),
		};
		Ok(r#type)
	}

	fn report(&mut self, error: ScanError) {
		warn!("Scan error: {error}");
		self.diagnostics.push(error);
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan an integer literal
	fn number(&mut self) -> Result<TokenType<'a>, ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		let digits = &self.source[self.start..self.cursor];
		digits
			.parse()
			.map(Number)
			.map_err(|_| ScanError::new(self.line, ScanErrorType::NumberOutOfRange(digits.to_string())))
	}

	/// Consume the rest of an identifier, returning its text
	fn word(&mut self) -> &'a str {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		&self.source[self.start..self.cursor]
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> { TokenType::keyword_or_identifier(self.word()) }

	/// Scan a `:name` variable reference, the colon is already consumed
	fn colon_identifier(&mut self) -> TokenType<'a> { ColonIdentifier(&self.word()[1..]) }
}

impl<'a> Iterator for Scanner<'a> {
	type Item = Token<'a>;

	/// Hands out the end marker exactly once after the last real token.
	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}
		self.scan_token().or_else(|| {
			self.finished = true;
			Some(Token::eof(self.line))
		})
	}
}

fn is_identifier_start(c: char) -> bool { c.is_ascii_alphabetic() || c == '_' }
