pub mod alu;
pub mod registers;

use serde_derive::{Deserialize, Serialize};

pub use self::registers::{Flags, Register, RegisterPair, Registers};

/// The processor state proper: register file, unpacked condition flags,
/// the interrupt-enable and halted latches, and the cycle count of the
/// most recent step. Memory and I/O hooks live on the machine that owns
/// this state.
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct CPU {
	pub registers: Registers,
	pub flags: Flags,
	pub ei: bool,
	pub hlt: bool,
	pub cycles: usize,
}

impl CPU {
	pub fn new() -> CPU {
		Default::default()
	}

	/// Return every register, flag and latch to the power-on state.
	/// Memory is not touched, so a loaded image can be re-run.
	pub fn reset(&mut self) {
		self.registers = Registers::new();
		self.flags = Flags::default();
		self.ei = false;
		self.hlt = false;
		self.cycles = 0;
	}
}
