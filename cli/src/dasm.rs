/* Standalone disassembler: walks a rom file from address 0 and prints one
 * line per instruction. */

use std::fs::File;
use std::io::Read;
use std::process::exit;

use clap::{App, Arg};

use r8080_core::i8080::disasm;

fn main() {
	let matches = App::new("dasm")
		.version("0.1")
		.about("8080 disassembler")
		.arg(Arg::with_name("rom")
			.value_name("FILE")
			.required(true))
		.get_matches();

	let path = matches.value_of("rom").expect("rom argument is required");

	let mut buffer = Vec::new();
	if let Err(error) = File::open(path).and_then(|mut file| file.read_to_end(&mut buffer)) {
		eprintln!("dasm: can't read {}: {}", path, error);
		exit(1);
	}

	for line in disasm::get_assembly(&buffer) {
		println!("{}", line);
	}
}
