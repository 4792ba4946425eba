//! # From turtle commands to stack-machine assembly
//!
//! User's source code:
//!
//! ``` text
//! TO SQUARE :size
//!     WHILE (:n < 4) FORWARD :size RIGHT 90 n = :n + 1 END
//! END
//! SQUARE 50
//! ```

//! ## Scanning
//!
//! The scanner turns characters into tokens: numbers `50`, names `SQUARE`,
//! variable references `:size`, reserved words `WHILE`, operators `<`.
//! Whitespace and newlines carry no meaning besides the line count. A
//! character the language does not know is reported and skipped.

//! ## Parsing and code generation
//!
//! There is no syntax tree. Every time the parser recognises a production it
//! calls the matching code generator action, which resolves names in the
//! symbol table and returns a fragment of code for the parent production.
//! That makes this a `single-pass compiler`.
//!
//! Fragments are lists of stack-machine instructions: `a + b` becomes the
//! code of `a`, the code of `b`, then `ADD`. Comparisons become a `CMP` plus
//! the conditional jumps that loops and conditionals branch with.

//! ## Symbol table
//!
//! Builtin turtle procedures are seeded before parsing starts and expand
//! inline where they are called. Procedures written with `TO` are called with
//! `CALL` and their definitions are kept in the table until emission. Unknown
//! names used as values become variables.

//! ## Emission
//!
//! The program is assembled as `.START`, `.INIT`, `.DATA` (one line per
//! variable), `.CODE`, the `DEF __main__:` block ending in `HALT`, and one
//! `DEF name: … RET` block per procedure.

pub mod cli;
mod codegen;
mod compiler;
mod config;
mod emitter;
mod error;
mod parser;
mod scanner;
mod symtable;

pub use codegen::instruction::{Code, Instruction, Jump, Label, LabelKind, Number};
pub use compiler::Compiler;
pub use config::CompileOptions;
pub use emitter::Program;
pub use error::{
	LogoError,
	parser::{ParseError, ParseErrorType, ParserError},
	scanner::{ScanError, ScanErrorType},
};
pub use symtable::{Category, Symbol, SymbolTable};
