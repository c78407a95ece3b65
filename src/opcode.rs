use crate::alu::AluOp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Hlt,
    Ldi,
    Prn,
    Push,
    Pop,
    Alu(AluOp),
}

impl Instruction {
    pub fn decode(opcode: u8) -> Option<Instruction> {
        Some(match opcode {
            HLT => Instruction::Hlt,
            LDI => Instruction::Ldi,
            PRN => Instruction::Prn,
            PUSH => Instruction::Push,
            POP => Instruction::Pop,
            ADD => Instruction::Alu(AluOp::Add),
            MUL => Instruction::Alu(AluOp::Mul),
            _ => return None,
        })
    }

    pub fn opcode(self) -> u8 {
        match self {
            Instruction::Hlt => HLT,
            Instruction::Ldi => LDI,
            Instruction::Prn => PRN,
            Instruction::Push => PUSH,
            Instruction::Pop => POP,
            Instruction::Alu(AluOp::Add) => ADD,
            Instruction::Alu(AluOp::Mul) => MUL,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Hlt => "HLT",
            Instruction::Ldi => "LDI",
            Instruction::Prn => "PRN",
            Instruction::Push => "PUSH",
            Instruction::Pop => "POP",
            Instruction::Alu(op) => op.mnemonic(),
        }
    }
}

/// Operand bytes following `opcode`, taken from its two high bits.
/// Holds for every byte, decodable or not.
pub const fn operand_count(opcode: u8) -> usize {
    (opcode >> 6) as usize
}

pub const HLT: u8 = 0b00_000001;
pub const LDI: u8 = 0b10_000010;
pub const PRN: u8 = 0b01_000111;
pub const PUSH: u8 = 0b01_000101;
pub const POP: u8 = 0b01_000110;

// ALU ops carry bit 5
pub const ADD: u8 = 0b10_100000;
pub const MUL: u8 = 0b10_100010;
