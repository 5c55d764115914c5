pub mod cpu;
pub mod disasm;
pub mod instructions;
pub mod opcodes;
pub mod savestates;

use log::trace;

use self::cpu::{CPU, RegisterPair};
use self::opcodes::OPCODES;

/// Size of the flat address space: 64 KiB, no MMU, addresses wrap.
pub const MEMORY_SIZE: usize = 0x10000;

/// Callback invoked by the IN instruction: takes the port number and
/// returns the byte to load into the accumulator.
pub type PortInCallback = dyn FnMut(u8) -> u8 + Send;

/// Callback invoked by the OUT instruction with the port number and the
/// accumulator value.
pub type PortOutCallback = dyn FnMut(u8, u8) + Send;

/// A complete 8080 machine: processor state, the 64 KiB memory image and
/// the optional I/O port hooks. The host drives it one instruction at a
/// time through `step` and may deliver interrupts in between.
pub struct I8080 {
	pub cpu: CPU,
	pub memory: Box<[u8]>,
	pub(crate) port_in: Option<Box<PortInCallback>>,
	pub(crate) port_out: Option<Box<PortOutCallback>>,
}

impl Default for I8080 {
	fn default() -> I8080 {
		I8080::new()
	}
}

impl I8080 {
	/// A machine with zeroed registers and zeroed memory. The program
	/// counter, interrupt latch and I/O hooks are the host's to set up.
	pub fn new() -> I8080 {
		I8080 {
			cpu: CPU::new(),
			memory: vec![0; MEMORY_SIZE].into_boxed_slice(),
			port_in: None,
			port_out: None,
		}
	}

	/// Copy a rom image into memory at `org` (conventionally 0x0100 for
	/// CP/M programs). Fails without copying anything if the image does
	/// not fit above the origin.
	pub fn load_rom(&mut self, rom: &[u8], org: u16) -> Result<(), &'static str> {
		let org = org as usize;
		if org + rom.len() > MEMORY_SIZE {
			return Err("rom exceeds memory");
		}
		self.memory[org..org + rom.len()].copy_from_slice(rom);
		Ok(())
	}

	pub fn read_byte(&self, address: u16) -> u8 {
		self.memory[address as usize]
	}

	pub fn write_byte(&mut self, address: u16, value: u8) {
		self.memory[address as usize] = value;
	}

	pub fn register_port_in(&mut self, callback: Box<PortInCallback>) {
		self.port_in = Some(callback);
	}

	pub fn register_port_out(&mut self, callback: Box<PortOutCallback>) {
		self.port_out = Some(callback);
	}

	pub fn remove_port_in(&mut self) {
		self.port_in = None;
	}

	pub fn remove_port_out(&mut self) {
		self.port_out = None;
	}

	/// Execute one instruction, leaving its cycle cost in `cpu.cycles`.
	///
	/// A halted processor only spins here (cycles = 0) until an interrupt
	/// clears the latch. Unknown opcodes advance the program counter by
	/// their metadata size, emit a diagnostic and change nothing else.
	pub fn step(&mut self) {
		if self.cpu.hlt {
			trace!("{:04x}: halted", self.cpu.registers.pc);
			self.cpu.cycles = 0;
			return;
		}

		let pc = self.cpu.registers.pc;
		let opcode = self.read_byte(pc);
		let inst = &OPCODES[opcode as usize];

		self.cpu.registers.pc = pc.wrapping_add(inst.size as u16);
		self.cpu.cycles = inst.cycles as usize;

		self.execute(opcode, pc);

		if log::log_enabled!(log::Level::Trace) {
			trace!("{}", self.trace_line(pc, opcode));
		}
	}

	/// Deliver an RST-style interrupt; `address` is one of the eight
	/// restart vectors 0x00, 0x08, .. 0x38. Honored only while the
	/// interrupt-enable latch is set, otherwise silently dropped; on
	/// acceptance it clears the latch, wakes a halted processor and
	/// performs an unconditional call to the vector.
	pub fn interrupt(&mut self, address: u8) {
		self.rst((address & 0x38) as u16);
	}

	/// One line of the execution trace: the pre-instruction pc, the raw
	/// opcode, the disassembled instruction, the register file, the five
	/// flags and the byte at HL.
	fn trace_line(&self, pc: u16, opcode: u8) -> String {
		let inst = &OPCODES[opcode as usize];
		let operand = match inst.size {
			2 => self.read_byte(pc.wrapping_add(1)) as u16,
			3 => {
				self.read_byte(pc.wrapping_add(1)) as u16
					| (self.read_byte(pc.wrapping_add(2)) as u16) << 8
			},
			_ => 0,
		};

		let registers = &self.cpu.registers;
		let flags = &self.cpu.flags;
		let hl = registers.get_register_pair(RegisterPair::HL);

		format!(
			"{:04x}: ({:02x}) {:<16} a={:02x},bc={:04x},de={:04x},hl={:04x},sp={:04x} | c={},p={},a={},z={},s={} | M={:02x}",
			pc,
			opcode,
			disasm::format_instruction(opcode, operand),
			registers.a,
			registers.get_register_pair(RegisterPair::BC),
			registers.get_register_pair(RegisterPair::DE),
			hl,
			registers.sp,
			flags.cf as u8,
			flags.pf as u8,
			flags.af as u8,
			flags.zf as u8,
			flags.sf as u8,
			self.read_byte(hl),
		)
	}
}
