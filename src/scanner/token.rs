use std::fmt;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType<'a>,
	pub lexeme: &'a str,
	pub line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }

	/// The synthetic end marker, it has no lexeme.
	pub fn eof(line: usize) -> Self { Self::new(TokenType::Eof, "", line) }
}

/// Identifiers the scanner turns into value-returning builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBuiltin {
	/// `RANDOM`, pushes a random number.
	Random,
	/// `TYPEIN`, pushes a number read from the user.
	TypeIn,
}

/// The different types of tokens in the turtle language
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType<'a> {
	/// New Line Character `\n`.
	NewLine,
	/// Empty Character: ` `, `\r`, `\t`.
	EmptyChar,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Caret `^`.
	Caret,
	/// Assignment `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Not equal `<>`.
	LessGreater,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Integer literal.
	Number(i64),
	/// Procedure or variable name.
	Identifier(&'a str),
	/// Variable reference `:name`, holds the name without the colon.
	ColonIdentifier(&'a str),
	/// `RANDOM` or `TYPEIN`.
	ValueBuiltin(ValueBuiltin),
	If,
	Then,
	End,
	Else,
	While,
	To,
	And,
	Or,
	/// End of input.
	Eof,
}

impl<'a> TokenType<'a> {
	pub fn is_ignored(&self) -> bool { matches!(self, TokenType::EmptyChar | TokenType::NewLine) }

	/// Reserved words and value builtins are matched exactly, `while` is a
	/// plain identifier.
	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"IF" => TokenType::If,
			"THEN" => TokenType::Then,
			"END" => TokenType::End,
			"ELSE" => TokenType::Else,
			"WHILE" => TokenType::While,
			"TO" => TokenType::To,
			"AND" => TokenType::And,
			"OR" => TokenType::Or,
			"RANDOM" => TokenType::ValueBuiltin(ValueBuiltin::Random),
			"TYPEIN" => TokenType::ValueBuiltin(ValueBuiltin::TypeIn),
			_ => TokenType::Identifier(value),
		}
	}

	pub fn is_arithmetic(&self) -> bool {
		matches!(self, TokenType::Plus | TokenType::Minus | TokenType::Star | TokenType::Slash | TokenType::Caret)
	}

	pub fn is_relational(&self) -> bool {
		matches!(
			self,
			TokenType::EqualEqual
				| TokenType::LessGreater
				| TokenType::Greater
				| TokenType::GreaterEqual
				| TokenType::Less
				| TokenType::LessEqual
		)
	}
}

impl fmt::Display for TokenType<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use TokenType::*;
		let name = match self {
			NewLine => "NEWLINE",
			EmptyChar => "EMPTY",
			LeftParen => "OPEN_PAR",
			RightParen => "CLOSE_PAR",
			Plus => "PLUS",
			Minus => "MINUS",
			Star => "MUL",
			Slash => "DIV",
			Caret => "POW",
			Equal => "ASSIGN",
			EqualEqual => "EQUALS",
			LessGreater => "DIFF",
			Greater => "GREATER",
			GreaterEqual => "GREATEQ",
			Less => "LOWER",
			LessEqual => "LOWEQ",
			Number(_) => "NUMBER",
			Identifier(_) => "IDENTIFIER",
			ColonIdentifier(_) => "COLON_ID",
			ValueBuiltin(_) => "RETURN_NUMBER",
			If => "IF",
			Then => "THEN",
			End => "END",
			Else => "ELSE",
			While => "WHILE",
			To => "TO",
			And => "AND",
			Or => "OR",
			Eof => "EOF",
		};
		f.write_str(name)
	}
}
