/* CP/M-style test harness: loads .COM diagnostic roms and runs them
 * against the 8080 core, emulating just enough of the BDOS console calls
 * for them to print their banners. */

use std::fs::File;
use std::io::{self, Error, Read, Write};
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::{App, Arg};

use r8080_core::{I8080, RegisterPair};

const DEFAULT_ORG: u16 = 0x0100;

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Box<[u8]>, Error> {
	let mut file = File::open(path)?;
	let mut buffer = Vec::new();
	file.read_to_end(&mut buffer)?;
	Ok(buffer.into_boxed_slice())
}

/// CP/M BDOS console emulation: function 2 prints the E register as a
/// character, function 9 prints the '$'-terminated string at DE. The
/// function code is taken from C.
fn bdos_call(machine: &I8080) {
	match machine.cpu.registers.c {
		2 => print!("{}", machine.cpu.registers.e as char),
		9 => {
			let mut address = machine.cpu.registers.get_register_pair(RegisterPair::DE);
			loop {
				let ch = machine.read_byte(address);
				if ch == b'$' {
					break;
				}
				print!("{}", ch as char);
				address = address.wrapping_add(1);
			}
		},
		_ => {},
	};
	io::stdout().flush().expect("failed to flush stdout");
}

fn run_rom(path: &str, org: u16) -> Result<(), String> {
	let rom = read_file(path).map_err(|error| format!("{}: {}", path, error))?;

	let mut machine = I8080::new();
	machine.load_rom(&rom, org).map_err(|error| format!("{}: {}", path, error))?;

	// out 0 at the reset vector terminates the run
	machine.write_byte(0x0000, 0xd3);
	machine.write_byte(0x0001, 0x00);

	// out 1; ei; ret at 0x0005 emulates the BDOS entry point
	machine.write_byte(0x0005, 0xd3);
	machine.write_byte(0x0006, 0x01);
	machine.write_byte(0x0007, 0xfb);
	machine.write_byte(0x0008, 0xc9);

	machine.cpu.registers.pc = org;
	machine.cpu.ei = true;

	// The out hook only records the port; the run loop services it
	// between steps, where the machine state is available again.
	let pending: Arc<Mutex<Option<u8>>> = Arc::new(Mutex::new(None));
	{
		let pending = pending.clone();
		machine.register_port_out(Box::new(move |port, _| {
			*pending.lock().expect("port latch poisoned") = Some(port);
		}));
	}

	println!("cpmtest: running \"{}\"", path);

	let mut instructions: u64 = 0;
	let mut cycles: u64 = 0;

	loop {
		machine.step();
		instructions += 1;
		cycles += machine.cpu.cycles as u64;

		let port = pending.lock().expect("port latch poisoned").take();
		match port {
			Some(0) => break,
			Some(1) => bdos_call(&machine),
			_ => {},
		}
	}

	println!();
	println!("cpmtest: {} cycles, {} instructions", cycles, instructions);
	Ok(())
}

fn main() {
	let matches = App::new("cpmtest")
		.version("0.1")
		.about("Runs CP/M diagnostic roms against the 8080 core")
		.arg(Arg::with_name("rom")
			.value_name("FILE")
			.multiple(true)
			.required(true))
		.arg(Arg::with_name("org")
			.long("org")
			.takes_value(true)
			.value_name("ADDR")
			.help("load address in hex (default 0100)")
			.required(false))
		.get_matches();

	let org = match matches.value_of("org") {
		Some(text) => match u16::from_str_radix(text.trim_start_matches("0x"), 16) {
			Ok(org) => org,
			Err(_) => {
				eprintln!("cpmtest: invalid org {:?}", text);
				exit(1);
			},
		},
		None => DEFAULT_ORG,
	};

	let mut failed = false;
	for path in matches.values_of("rom").expect("rom argument is required") {
		if let Err(message) = run_rom(path, org) {
			eprintln!("cpmtest: {}", message);
			failed = true;
		}
	}

	if failed {
		exit(1);
	}
}
