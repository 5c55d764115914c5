use std::fmt;

use serde_derive::{Deserialize, Serialize};

#[derive(Default, Copy, Clone, Serialize, Deserialize)]
pub struct Registers {
	pub a: u8,
	pub b: u8,
	pub c: u8,
	pub d: u8,
	pub e: u8,
	pub h: u8,
	pub l: u8,
	pub sp: u16,
	pub pc: u16,
}

/// An 8-bit operand of the unified register encoding (bits 5..3 for
/// destinations, bits 2..0 for sources). M is the pseudo-register that
/// addresses the memory byte at HL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
	B, C, D, E, H, L, M, A
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegisterPair {
	BC, DE, HL, SP
}

impl fmt::Debug for Registers {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f,
			"a={:02x} bc={:04x} de={:04x} hl={:04x} sp={:04x} pc={:04x}",
			self.a,
			self.get_register_pair(RegisterPair::BC),
			self.get_register_pair(RegisterPair::DE),
			self.get_register_pair(RegisterPair::HL),
			self.sp,
			self.pc)
	}
}

impl Registers {
	pub fn new() -> Registers {
		Default::default()
	}

	/// Read a register pair as a 16-bit value (high half in the first
	/// register of the pair).
	pub fn get_register_pair(&self, reg: RegisterPair) -> u16 {
		match reg {
			RegisterPair::BC => ((self.b as u16) << 8) | (self.c as u16),
			RegisterPair::DE => ((self.d as u16) << 8) | (self.e as u16),
			RegisterPair::HL => ((self.h as u16) << 8) | (self.l as u16),
			RegisterPair::SP => self.sp,
		}
	}

	pub fn set_register_pair(&mut self, reg: RegisterPair, value: u16) {
		match reg {
			RegisterPair::BC => {
				self.b = (value >> 8) as u8;
				self.c = value as u8;
			},
			RegisterPair::DE => {
				self.d = (value >> 8) as u8;
				self.e = value as u8;
			},
			RegisterPair::HL => {
				self.h = (value >> 8) as u8;
				self.l = value as u8;
			},
			RegisterPair::SP => self.sp = value,
		};
	}
}

/// The five condition flags, held unpacked. They are only ever packed into
/// a status-word byte by PUSH PSW (and unpacked again by POP PSW).
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
	pub cf: bool,
	pub zf: bool,
	pub sf: bool,
	pub pf: bool,
	pub af: bool,
}

impl Flags {
	/// Pack the flags into the processor status word:
	/// bit 7 sign, 6 zero, 4 aux carry, 2 parity, 0 carry.
	/// Bit 1 always reads as 1, bits 3 and 5 as 0.
	pub fn psw(&self) -> u8 {
		(self.sf as u8) << 7 |
			(self.zf as u8) << 6 |
			(self.af as u8) << 4 |
			(self.pf as u8) << 2 |
			0x02 |
			self.cf as u8
	}

	/// Load the flags from a status-word byte. The filler bits 1, 3 and 5
	/// are ignored.
	pub fn set_psw(&mut self, value: u8) {
		self.sf = value >> 7 & 1 == 1;
		self.zf = value >> 6 & 1 == 1;
		self.af = value >> 4 & 1 == 1;
		self.pf = value >> 2 & 1 == 1;
		self.cf = value & 1 == 1;
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn register_pair_round_trip() {
		let mut regs = Registers::new();
		for pair in [RegisterPair::BC, RegisterPair::DE, RegisterPair::HL, RegisterPair::SP] {
			regs.set_register_pair(pair, 0x1234);
			assert_eq!(regs.get_register_pair(pair), 0x1234);
		}
		assert_eq!(regs.b, 0x12);
		assert_eq!(regs.c, 0x34);
	}

	#[test]
	fn psw_filler_bits() {
		let flags = Flags::default();
		assert_eq!(flags.psw(), 0x02);

		let all = Flags { cf: true, zf: true, sf: true, pf: true, af: true };
		assert_eq!(all.psw(), 0b1101_0111);
	}

	#[test]
	fn psw_round_trip_ignores_filler() {
		let mut flags = Flags::default();
		flags.set_psw(0b0010_1010);
		assert_eq!(flags, Flags::default());

		let all = Flags { cf: true, zf: true, sf: true, pf: true, af: true };
		let mut restored = Flags::default();
		restored.set_psw(all.psw());
		assert_eq!(restored, all);
	}
}
