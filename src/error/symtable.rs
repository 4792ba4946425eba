/// Errors raised by symbol table operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SymbolError {
	/// `update` was called for a name nobody declared.
	#[error("Symbol '{0}' is not declared")]
	Undeclared(String),
}
