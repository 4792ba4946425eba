use crate::error::symtable::SymbolError;

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error(transparent)]
	ParseError(#[from] ParseError),
	#[error(transparent)]
	SymbolError(#[from] SymbolError),
}

#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ParseError {
	line:   usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn kind(&self) -> &ParseErrorType { &self.r#type }

	/// Whether the parser ran out of tokens instead of meeting a wrong one.
	pub fn is_eof(&self) -> bool { matches!(self.r#type, ParseErrorType::UnexpectedEof) }
}

#[derive(Debug)]
pub enum ParseErrorType {
	UnexpectedToken { kind: String, lexeme: String },
	UnexpectedEof,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { kind, lexeme } => {
				write!(f, "Unexpected token {kind}:'{lexeme}'")
			}
			UnexpectedEof => {
				write!(f, "Syntax error at EOF")
			}
		}
	}
}
