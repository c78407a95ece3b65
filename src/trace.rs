//! Per-cycle CPU state dump: `TRACE: PC | OP A1 A2 | R0 .. R7`.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::memory::Memory;
use crate::registers::Registers;

pub fn format(pc: usize, memory: &Memory, registers: &Registers) -> String {
    let mut line = format!(
        "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
        pc,
        memory.peek(pc),
        memory.peek(pc + 1),
        memory.peek(pc + 2)
    );
    for reg in registers.as_array() {
        let _ = write!(line, " {reg:02X}");
    }
    line
}

pub fn write_line<W: Write + ?Sized>(
    out: &mut W,
    pc: usize,
    memory: &Memory,
    registers: &Registers,
) -> io::Result<()> {
    writeln!(out, "{}", format(pc, memory, registers))
}
