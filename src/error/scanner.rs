/// A specific scanning error with line number and type.
///
/// Scanning errors never stop a compilation run, the scanner reports them and
/// keeps going.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn kind(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorType {
	/// Error for characters outside the lexical grammar.
	UnexpectedCharacter(char),
	/// A numeric literal that does not fit the literal type.
	NumberOutOfRange(String),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Illegal character '{c}'")
			}
			NumberOutOfRange(digits) => {
				write!(f, "Number literal {digits} is out of range")
			}
		}
	}
}
