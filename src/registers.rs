use crate::error::Error;

pub const NUM_REGISTERS: usize = 8;
/// Register 7 doubles as the stack pointer.
pub const SP: u8 = 7;
pub const SP_INIT: u8 = 0xF4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    regs: [u8; NUM_REGISTERS],
}

impl Registers {
    pub fn new() -> Registers {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP as usize] = SP_INIT;
        Registers { regs }
    }

    pub fn get(&self, index: u8) -> Result<u8, Error> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(Error::InvalidRegister(index))
    }

    pub fn set(&mut self, index: u8, value: u8) -> Result<(), Error> {
        let reg = self
            .regs
            .get_mut(index as usize)
            .ok_or(Error::InvalidRegister(index))?;
        *reg = value;
        Ok(())
    }

    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    pub fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
