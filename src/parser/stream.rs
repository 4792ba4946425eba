use std::collections::VecDeque;

use crate::{
	error::scanner::ScanError,
	scanner::{Scanner, Token},
};

/// Pulls tokens from the scanner on demand, keeping the few the parser has
/// looked at but not consumed yet.
pub(super) struct TokenStream<'a> {
	scanner:   Scanner<'a>,
	lookahead: VecDeque<Token<'a>>,
}

impl<'a> TokenStream<'a> {
	pub fn new(scanner: Scanner<'a>) -> Self { Self { scanner, lookahead: VecDeque::new() } }

	/// Peek at the current token.
	pub fn peek(&mut self) -> &Token<'a> { self.peek_nth(0) }

	/// Peek `n` tokens past the current one. Past the end every peek sees the
	/// end marker.
	pub fn peek_nth(&mut self, n: usize) -> &Token<'a> {
		while self.lookahead.len() <= n {
			let token = self.scanner.next().unwrap_or_else(|| Token::eof(self.scanner.line()));
			self.lookahead.push_back(token);
		}
		&self.lookahead[n]
	}

	/// Advance to the next token.
	pub fn advance(&mut self) -> Token<'a> {
		self.peek();
		self.lookahead.pop_front().unwrap_or_else(|| Token::eof(self.scanner.line()))
	}

	pub fn into_diagnostics(self) -> Vec<ScanError> { self.scanner.into_diagnostics() }
}
