use super::opcodes::OPCODES;

/// Format a single instruction from its opcode and (already decoded)
/// immediate. One-byte instructions are the bare mnemonic; two- and
/// three-byte instructions get `$xx` / `$xxxx` appended.
pub fn format_instruction(opcode: u8, operand: u16) -> String {
	let inst = &OPCODES[opcode as usize];
	match inst.size {
		2 => format!("{} ${:02x}", inst.mnemonic, operand as u8),
		3 => format!("{} ${:04x}", inst.mnemonic, operand),
		_ => inst.mnemonic.to_string(),
	}
}

/// Disassemble a whole buffer, starting from address 0. Each line carries
/// the address, the raw instruction bytes and the formatted mnemonic.
/// A truncated trailing instruction ends the walk.
pub fn get_assembly(bytes: &[u8]) -> Vec<String> {
	let mut lines = Vec::new();
	let mut pc: usize = 0;

	while pc < bytes.len() {
		let opcode = bytes[pc];
		let size = OPCODES[opcode as usize].size as usize;

		if pc + size > bytes.len() {
			break;
		}

		let operand = match size {
			2 => bytes[pc + 1] as u16,
			3 => bytes[pc + 1] as u16 | (bytes[pc + 2] as u16) << 8,
			_ => 0,
		};

		let raw = bytes[pc..pc + size]
			.iter()
			.map(|byte| format!("{:02x}", byte))
			.collect::<Vec<String>>()
			.join(" ");

		lines.push(format!("{:04x}: {:<8} : {}", pc, raw, format_instruction(opcode, operand)));
		pc += size;
	}

	lines
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn formats_by_operand_width() {
		assert_eq!(format_instruction(0x00, 0), "nop");
		assert_eq!(format_instruction(0x3e, 0x42), "mvi a, $42");
		assert_eq!(format_instruction(0xc3, 0x0100), "jmp $0100");
	}

	#[test]
	fn walks_a_buffer() {
		// mvi a, $42 / out $01 / jmp $0000
		let lines = get_assembly(&[0x3e, 0x42, 0xd3, 0x01, 0xc3, 0x00, 0x00]);
		assert_eq!(lines, vec![
			"0000: 3e 42    : mvi a, $42",
			"0002: d3 01    : out $01",
			"0004: c3 00 00 : jmp $0000",
		]);
	}

	#[test]
	fn stops_at_truncated_instruction() {
		// the trailing 0xc3 is missing its address bytes
		let lines = get_assembly(&[0x00, 0xc3]);
		assert_eq!(lines.len(), 1);
	}
}
