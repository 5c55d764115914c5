/// One entry of the opcode metadata table: the operand-less mnemonic text,
/// the instruction length in bytes (1..3) and the base cycle cost. The
/// disassembler appends `$xx`/`$xxxx` to the mnemonic according to `size`.
///
/// Conditional call and return entries carry their branch-not-taken cost;
/// the execution engine adds 6 cycles when the branch is taken.
pub struct Opcode {
	pub mnemonic: &'static str,
	pub size: u8,
	pub cycles: u8,
}

const fn op(mnemonic: &'static str, size: u8, cycles: u8) -> Opcode {
	Opcode { mnemonic, size, cycles }
}

/// Metadata for all 256 opcode bytes. The `*`-prefixed entries are the
/// undocumented aliases; they are listed so that the disassembler and the
/// pc advance stay deterministic over arbitrary bytes, but the engine
/// treats them as unimplemented.
pub static OPCODES: [Opcode; 256] = [
	// 0x00
	op("nop", 1, 4),
	op("lxi b,", 3, 10),
	op("stax b", 1, 7),
	op("inx b", 1, 5),
	op("inr b", 1, 5),
	op("dcr b", 1, 5),
	op("mvi b,", 2, 7),
	op("rlc", 1, 4),
	op("*nop", 1, 4),
	op("dad b", 1, 10),
	op("ldax b", 1, 7),
	op("dcx b", 1, 5),
	op("inr c", 1, 5),
	op("dcr c", 1, 5),
	op("mvi c,", 2, 7),
	op("rrc", 1, 4),
	// 0x10
	op("*nop", 1, 4),
	op("lxi d,", 3, 10),
	op("stax d", 1, 7),
	op("inx d", 1, 5),
	op("inr d", 1, 5),
	op("dcr d", 1, 5),
	op("mvi d,", 2, 7),
	op("ral", 1, 4),
	op("*nop", 1, 4),
	op("dad d", 1, 10),
	op("ldax d", 1, 7),
	op("dcx d", 1, 5),
	op("inr e", 1, 5),
	op("dcr e", 1, 5),
	op("mvi e,", 2, 7),
	op("rar", 1, 4),
	// 0x20
	op("*nop", 1, 4),
	op("lxi h,", 3, 10),
	op("shld", 3, 16),
	op("inx h", 1, 5),
	op("inr h", 1, 5),
	op("dcr h", 1, 5),
	op("mvi h,", 2, 7),
	op("daa", 1, 4),
	op("*nop", 1, 4),
	op("dad h", 1, 10),
	op("lhld", 3, 16),
	op("dcx h", 1, 5),
	op("inr l", 1, 5),
	op("dcr l", 1, 5),
	op("mvi l,", 2, 7),
	op("cma", 1, 4),
	// 0x30
	op("*nop", 1, 4),
	op("lxi sp,", 3, 10),
	op("sta", 3, 13),
	op("inx sp", 1, 5),
	op("inr m", 1, 10),
	op("dcr m", 1, 10),
	op("mvi m,", 2, 10),
	op("stc", 1, 4),
	op("*nop", 1, 4),
	op("dad sp", 1, 10),
	op("lda", 3, 13),
	op("dcx sp", 1, 5),
	op("inr a", 1, 5),
	op("dcr a", 1, 5),
	op("mvi a,", 2, 7),
	op("cmc", 1, 4),
	// 0x40
	op("mov b, b", 1, 5),
	op("mov b, c", 1, 5),
	op("mov b, d", 1, 5),
	op("mov b, e", 1, 5),
	op("mov b, h", 1, 5),
	op("mov b, l", 1, 5),
	op("mov b, m", 1, 7),
	op("mov b, a", 1, 5),
	op("mov c, b", 1, 5),
	op("mov c, c", 1, 5),
	op("mov c, d", 1, 5),
	op("mov c, e", 1, 5),
	op("mov c, h", 1, 5),
	op("mov c, l", 1, 5),
	op("mov c, m", 1, 7),
	op("mov c, a", 1, 5),
	// 0x50
	op("mov d, b", 1, 5),
	op("mov d, c", 1, 5),
	op("mov d, d", 1, 5),
	op("mov d, e", 1, 5),
	op("mov d, h", 1, 5),
	op("mov d, l", 1, 5),
	op("mov d, m", 1, 7),
	op("mov d, a", 1, 5),
	op("mov e, b", 1, 5),
	op("mov e, c", 1, 5),
	op("mov e, d", 1, 5),
	op("mov e, e", 1, 5),
	op("mov e, h", 1, 5),
	op("mov e, l", 1, 5),
	op("mov e, m", 1, 7),
	op("mov e, a", 1, 5),
	// 0x60
	op("mov h, b", 1, 5),
	op("mov h, c", 1, 5),
	op("mov h, d", 1, 5),
	op("mov h, e", 1, 5),
	op("mov h, h", 1, 5),
	op("mov h, l", 1, 5),
	op("mov h, m", 1, 7),
	op("mov h, a", 1, 5),
	op("mov l, b", 1, 5),
	op("mov l, c", 1, 5),
	op("mov l, d", 1, 5),
	op("mov l, e", 1, 5),
	op("mov l, h", 1, 5),
	op("mov l, l", 1, 5),
	op("mov l, m", 1, 7),
	op("mov l, a", 1, 5),
	// 0x70
	op("mov m, b", 1, 7),
	op("mov m, c", 1, 7),
	op("mov m, d", 1, 7),
	op("mov m, e", 1, 7),
	op("mov m, h", 1, 7),
	op("mov m, l", 1, 7),
	op("hlt", 1, 7),
	op("mov m, a", 1, 7),
	op("mov a, b", 1, 5),
	op("mov a, c", 1, 5),
	op("mov a, d", 1, 5),
	op("mov a, e", 1, 5),
	op("mov a, h", 1, 5),
	op("mov a, l", 1, 5),
	op("mov a, m", 1, 7),
	op("mov a, a", 1, 5),
	// 0x80
	op("add b", 1, 4),
	op("add c", 1, 4),
	op("add d", 1, 4),
	op("add e", 1, 4),
	op("add h", 1, 4),
	op("add l", 1, 4),
	op("add m", 1, 7),
	op("add a", 1, 4),
	op("adc b", 1, 4),
	op("adc c", 1, 4),
	op("adc d", 1, 4),
	op("adc e", 1, 4),
	op("adc h", 1, 4),
	op("adc l", 1, 4),
	op("adc m", 1, 7),
	op("adc a", 1, 4),
	// 0x90
	op("sub b", 1, 4),
	op("sub c", 1, 4),
	op("sub d", 1, 4),
	op("sub e", 1, 4),
	op("sub h", 1, 4),
	op("sub l", 1, 4),
	op("sub m", 1, 7),
	op("sub a", 1, 4),
	op("sbb b", 1, 4),
	op("sbb c", 1, 4),
	op("sbb d", 1, 4),
	op("sbb e", 1, 4),
	op("sbb h", 1, 4),
	op("sbb l", 1, 4),
	op("sbb m", 1, 7),
	op("sbb a", 1, 4),
	// 0xa0
	op("ana b", 1, 4),
	op("ana c", 1, 4),
	op("ana d", 1, 4),
	op("ana e", 1, 4),
	op("ana h", 1, 4),
	op("ana l", 1, 4),
	op("ana m", 1, 7),
	op("ana a", 1, 4),
	op("xra b", 1, 4),
	op("xra c", 1, 4),
	op("xra d", 1, 4),
	op("xra e", 1, 4),
	op("xra h", 1, 4),
	op("xra l", 1, 4),
	op("xra m", 1, 7),
	op("xra a", 1, 4),
	// 0xb0
	op("ora b", 1, 4),
	op("ora c", 1, 4),
	op("ora d", 1, 4),
	op("ora e", 1, 4),
	op("ora h", 1, 4),
	op("ora l", 1, 4),
	op("ora m", 1, 7),
	op("ora a", 1, 4),
	op("cmp b", 1, 4),
	op("cmp c", 1, 4),
	op("cmp d", 1, 4),
	op("cmp e", 1, 4),
	op("cmp h", 1, 4),
	op("cmp l", 1, 4),
	op("cmp m", 1, 7),
	op("cmp a", 1, 4),
	// 0xc0
	op("rnz", 1, 5),
	op("pop b", 1, 10),
	op("jnz", 3, 10),
	op("jmp", 3, 10),
	op("cnz", 3, 11),
	op("push b", 1, 11),
	op("adi", 2, 7),
	op("rst 0", 1, 11),
	op("rz", 1, 5),
	op("ret", 1, 10),
	op("jz", 3, 10),
	op("*jmp", 3, 10),
	op("cz", 3, 11),
	op("call", 3, 17),
	op("aci", 2, 7),
	op("rst 1", 1, 11),
	// 0xd0
	op("rnc", 1, 5),
	op("pop d", 1, 10),
	op("jnc", 3, 10),
	op("out", 2, 10),
	op("cnc", 3, 11),
	op("push d", 1, 11),
	op("sui", 2, 7),
	op("rst 2", 1, 11),
	op("rc", 1, 5),
	op("*ret", 1, 10),
	op("jc", 3, 10),
	op("in", 2, 10),
	op("cc", 3, 11),
	op("*call", 3, 17),
	op("sbi", 2, 7),
	op("rst 3", 1, 11),
	// 0xe0
	op("rpo", 1, 5),
	op("pop h", 1, 10),
	op("jpo", 3, 10),
	op("xthl", 1, 18),
	op("cpo", 3, 11),
	op("push h", 1, 11),
	op("ani", 2, 7),
	op("rst 4", 1, 11),
	op("rpe", 1, 5),
	op("pchl", 1, 5),
	op("jpe", 3, 10),
	op("xchg", 1, 4),
	op("cpe", 3, 11),
	op("*call", 3, 17),
	op("xri", 2, 7),
	op("rst 5", 1, 11),
	// 0xf0
	op("rp", 1, 5),
	op("pop psw", 1, 10),
	op("jp", 3, 10),
	op("di", 1, 4),
	op("cp", 3, 11),
	op("push psw", 1, 11),
	op("ori", 2, 7),
	op("rst 6", 1, 11),
	op("rm", 1, 5),
	op("sphl", 1, 5),
	op("jm", 3, 10),
	op("ei", 1, 4),
	op("cm", 3, 11),
	op("*call", 3, 17),
	op("cpi", 2, 7),
	op("rst 7", 1, 11),
];
