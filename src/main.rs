use std::process;

use clap::Parser;
use logoc::{Compiler, cli::Cli};
use simple_logger::SimpleLogger;

fn main() {
	let cli = Cli::parse();

	if let Err(e) = SimpleLogger::new().with_level(cli.log_level()).env().init() {
		eprintln!("Failed init logger: {e}");
	}

	let compiler = Compiler::new(cli.options());
	let program = match &cli.input {
		Some(path) => compiler.compile_file(path),
		None => compiler.compile_reader(std::io::stdin().lock()),
	};

	let program = match program {
		Ok(program) => program,
		Err(e) => {
			eprintln!("Failed compile: {e}");
			process::exit(1);
		}
	};

	if let Err(e) = compiler.write_output(&cli.output, &program) {
		eprintln!("{e}");
		process::exit(1);
	}
	if !cli.quiet {
		print!("{}", program.assemble());
	}
}
