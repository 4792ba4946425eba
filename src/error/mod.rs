pub mod parser;
pub mod scanner;
pub mod symtable;

/// LogoError is the top-level error type for the compiler.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
	/// Internal compiler error or I/O failure around a compilation run
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Fatal error raised while parsing, the run produced no output
	#[error("{0}")]
	ParseError(#[from] parser::ParserError),
}
