use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::registers::Registers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
}

impl AluOp {
    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Mul => "MUL",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for AluOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(AluOp::Add),
            "MUL" => Ok(AluOp::Mul),
            _ => Err(Error::UnsupportedOperation(s.to_owned())),
        }
    }
}

/// `reg_a <- reg_a op reg_b`, wrapping at 8 bits.
pub fn apply(op: AluOp, regs: &mut Registers, reg_a: u8, reg_b: u8) -> Result<(), Error> {
    let a = regs.get(reg_a)?;
    let b = regs.get(reg_b)?;
    let result = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
    };
    regs.set(reg_a, result)
}
