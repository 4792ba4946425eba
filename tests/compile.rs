#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use logoc::{Category, CompileOptions, Compiler, LogoError, ParserError, ScanErrorType};
	use proptest::prelude::*;

	fn compile(source: &str) -> logoc::Program { Compiler::default().compile(source).unwrap() }

	fn statements(source: &str) -> Vec<String> { compile(source).statements().iter().map(ToString::to_string).collect() }

	#[test]
	fn compile_square_file() {
		let compiler = Compiler::default();
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("square.logo");
		let program = compiler.compile_file(&path).unwrap();
		assert!(program.diagnostics().is_empty());

		let expected = "\
.START __main__

.INIT 1 1 100 100

.DATA
n 0
size 0

.CODE

DEF __main__:
CLRSCR
UNSET 1
PUSH 50
PUSH 50
MVTO
SET 1
SET 1
PUSH 20.0
CALL SQUARE
RAND
CMP 50.0
JMORE :true_1
JP :false_1
:true_1
PUSH 90
PUSH 45.0
CALL MOVE
JP :endif_1
:false_1
PUSH 270
PUSH 45.0
CALL MOVE
:endif_1
PUSH 10.0
CALL SQUARE

HALT

DEF SQUARE:
STOR size
PUSH 0.0
STOR n
:while_0
LOAD n
CMP 4.0
JMORE :after_0
PUSH 0
LOAD size
CALL MOVE
PUSH 270
PUSH 90.0
CALL MOVE
LOAD n
PUSH 1.0
ADD
STOR n
JP :while_0
:after_0
RET
";
		assert_eq!(program.assemble(), expected);
	}

	#[test]
	fn missing_file_is_internal_error() {
		let result = Compiler::default().compile_file("does/not/exist.logo");
		assert!(matches!(result, Err(LogoError::InternalError(_))));
	}

	#[test]
	fn compile_from_reader() {
		let program = Compiler::default().compile_reader("FORWARD 10".as_bytes()).unwrap();
		assert_eq!(program.statements()[0].to_string(), "PUSH 0\nPUSH 10.0\nCALL MOVE");
	}

	#[test]
	fn write_output_file() {
		let compiler = Compiler::default();
		let program = compiler.compile("PENUP").unwrap();
		let path = std::env::temp_dir().join(format!("logoc-write-output-{}.lasm", std::process::id()));
		compiler.write_output(&path, &program).unwrap();
		assert_eq!(std::fs::read_to_string(&path).unwrap(), program.assemble());
		std::fs::remove_file(&path).unwrap();
	}

	#[test]
	fn options_reach_init_and_home() {
		let compiler = Compiler::new(CompileOptions { origin_x: 10, origin_y: 20, width: 300, height: 200 });
		let text = compiler.compile("HOME").unwrap().assemble();
		assert!(text.contains(".INIT 10 20 300 200\n"));
		assert!(text.contains("DEF __main__:\nUNSET 1\nPUSH 10\nPUSH 20\nMVTO\nSET 1\n"));
	}

	#[test]
	fn assignment_declares_variable() {
		let program = compile("x = 5");
		assert_eq!(program.statements()[0].to_string(), "PUSH 5.0\nSTOR x");
		assert_eq!(program.symbols().list_by_category(Category::Variable), vec!["x"]);
		assert!(program.assemble().contains(".DATA\nx 0\n"));
	}

	#[test]
	fn colon_identifier_declares_variable() {
		let program = compile("FORWARD :y");
		assert_eq!(program.statements()[0].to_string(), "PUSH 0\nLOAD y\nCALL MOVE");
		assert_eq!(program.symbols().list_by_category(Category::Variable), vec!["y"]);
	}

	#[test]
	fn while_labels_are_unique_per_loop() {
		let loops = statements("WHILE (a == b) PENUP END WHILE (a == b) PENUP END");
		assert_eq!(loops[0], ":while_0\nLOAD a\nCMP LOAD b\nJNZ :after_0\nUNSET 1\nJP :while_0\n:after_0");
		assert_eq!(loops[1], ":while_1\nLOAD a\nCMP LOAD b\nJNZ :after_1\nUNSET 1\nJP :while_1\n:after_1");
	}

	#[test]
	fn if_and_if_else_branch_on_opposite_jumps() {
		let if_then = statements("IF (a > b) THEN PENUP END").remove(0);
		assert!(if_then.contains("JLESS :endif_0"));
		assert!(!if_then.contains("JMORE"));

		let if_else = statements("IF (a > b) THEN PENUP ELSE PENDOWN END").remove(0);
		assert!(if_else.contains("JMORE :true_0"));
		assert!(!if_else.contains("JLESS"));
	}

	#[test]
	fn or_equal_comparisons_jump_like_strict_ones() {
		assert_eq!(
			statements("IF (a >= b) THEN PENUP END"),
			statements("IF (a > b) THEN PENUP END")
		);
		assert_eq!(
			statements("WHILE (a <= b) PENUP END"),
			statements("WHILE (a < b) PENUP END")
		);
	}

	/// `AND` and `OR` are not told apart and add no short-circuit code; a branch
	/// only looks at the first comparison.
	#[test]
	fn and_or_do_not_short_circuit() {
		let with_and = statements("IF (:a == 1 AND :b == 2) THEN PENUP END");
		let with_or = statements("IF (:a == 1 OR :b == 2) THEN PENUP END");
		let alone = statements("IF (:a == 1) THEN PENUP END");
		assert_eq!(with_and, with_or);
		assert_eq!(with_and, alone);
	}

	#[test]
	fn builtin_calls_are_inlined() {
		let code = statements("FORWARD 10").remove(0);
		assert_eq!(code, "PUSH 0\nPUSH 10.0\nCALL MOVE");
		assert!(!code.contains("CALL FORWARD"));
	}

	#[test]
	fn unknown_and_user_procedures_are_called() {
		assert_eq!(statements("FOO 1 2"), vec!["PUSH 1.0\nPUSH 2.0\nCALL FOO"]);
		assert_eq!(statements("TO FOO :a :b END FOO 1 2"), vec!["PUSH 1.0\nPUSH 2.0\nCALL FOO"]);
	}

	#[test]
	fn procedures_follow_halt_in_declaration_order() {
		let text = compile("TO B END TO A PENUP END A B").assemble();
		let halt = text.find("HALT").unwrap();
		let b = text.find("DEF B:\nRET").unwrap();
		let a = text.find("DEF A:\nUNSET 1\nRET").unwrap();
		assert!(halt < b && b < a);
		assert!(text.ends_with("DEF A:\nUNSET 1\nRET\n"));
	}

	#[test]
	fn declarations_leave_no_placeholder() {
		let text = compile("TO NOTHING END").assemble();
		assert!(text.contains("DEF __main__:\n\nHALT"));
		assert!(!text.to_lowercase().contains("empty"));
		assert!(!text.contains("None"));
	}

	#[test]
	fn illegal_character_is_skipped() {
		let program = compile("x = 5 @ y = 6");
		assert_eq!(program.statements().len(), 2);
		assert_eq!(program.statements()[1].to_string(), "PUSH 6.0\nSTOR y");
		assert_eq!(program.diagnostics().len(), 1);
		assert_eq!(program.diagnostics()[0].kind(), &ScanErrorType::UnexpectedCharacter('@'));
	}

	#[test]
	fn truncated_program_fails_at_end_of_input() {
		let result = Compiler::default().compile("IF (a > b) THEN");
		match result {
			Err(LogoError::ParseError(ParserError::ParseError(error))) => {
				assert!(error.is_eof());
				assert!(error.to_string().contains("EOF"));
			}
			Err(other) => panic!("unexpected error {other}"),
			Ok(_) => panic!("truncated program compiled"),
		}
	}

	#[test]
	fn huge_literal_uses_signed_exponent() {
		assert_eq!(statements("x = 10000000000000000"), vec!["PUSH 1e+16\nSTOR x"]);
	}

	#[test]
	fn redefined_turn_leaves_no_direction_on_the_stack() {
		let program = compile("TO FORWARD :d PENUP END FORWARD 10");
		assert_eq!(program.statements()[0].to_string(), "PUSH 10.0\nCALL FORWARD");
		assert!(program.assemble().ends_with("DEF FORWARD:\nSTOR d\nUNSET 1\nRET\n"));
	}

	#[test]
	fn lowercase_reserved_words_are_plain_names() {
		assert_eq!(statements("to = 5"), vec!["PUSH 5.0\nSTOR to"]);
		assert_eq!(statements("x = random"), vec!["LOAD random\nSTOR x"]);
	}

	#[test]
	fn every_compile_starts_fresh() {
		let compiler = Compiler::default();
		let first = compiler.compile("TO HOME END x = 1 WHILE (:x < 2) HOME END").unwrap();
		let second = compiler.compile("WHILE (:y < 2) HOME END").unwrap();

		assert!(first.statements()[1].to_string().contains("CALL HOME"));
		let second_loop = second.statements()[0].to_string();
		assert!(second_loop.starts_with(":while_0\n"));
		assert!(second_loop.contains("UNSET 1\nPUSH 1\nPUSH 1\nMVTO\nSET 1"));
		assert_eq!(second.symbols().list_by_category(Category::Variable), vec!["y"]);
		assert!(second.symbols().list_by_category(Category::UserProcedure).is_empty());
	}

	proptest! {
		#[test]
		fn literal_compiles_to_single_push(n in 0..10_000_000_000_000_000i64) {
			let program = compile(&n.to_string());
			prop_assert_eq!(program.statements().len(), 1);
			prop_assert_eq!(program.statements()[0].len(), 1);
			prop_assert_eq!(program.statements()[0].to_string(), format!("PUSH {:?}", n as f64));
		}

		#[test]
		fn arithmetic_is_postfix(a in 0..10_000i64, b in 0..10_000i64, op in 0..5usize) {
			let (symbol, mnemonic) = [("+", "ADD"), ("-", "SUB"), ("*", "MUL"), ("/", "DIV"), ("^", "POW")][op];
			let code = statements(&format!("{a} {symbol} :b{b}")).remove(0);
			prop_assert_eq!(code, format!("PUSH {a}.0\nLOAD b{b}\n{mnemonic}"));
		}
	}
}
