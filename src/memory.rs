use crate::error::Error;

pub const MEMORY_SIZE: usize = 256;

/// Flat byte-addressed memory shared by program code and the stack.
///
/// `mar`/`mdr` mirror the memory address and data registers of the modeled
/// hardware. They are updated on every access but nothing depends on them.
#[derive(Clone, Debug)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
    mar: usize,
    mdr: u8,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            cells: [0; MEMORY_SIZE],
            mar: 0,
            mdr: 0,
        }
    }

    /// Copies `image` to the start of memory. Fails if it does not fit.
    pub fn from_image(image: &[u8]) -> Result<Memory, Error> {
        if image.len() > MEMORY_SIZE {
            return Err(Error::OutOfBounds(MEMORY_SIZE));
        }
        let mut memory = Memory::new();
        memory.cells[..image.len()].copy_from_slice(image);
        Ok(memory)
    }

    pub fn read(&mut self, address: usize) -> Result<u8, Error> {
        let value = *self.cells.get(address).ok_or(Error::OutOfBounds(address))?;
        self.mar = address;
        self.mdr = value;
        Ok(value)
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<(), Error> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(Error::OutOfBounds(address))?;
        *cell = value;
        self.mar = address;
        self.mdr = value;
        Ok(())
    }

    /// Reads without touching `mar`/`mdr`. Out of range addresses read as 0.
    pub fn peek(&self, address: usize) -> u8 {
        self.cells.get(address).copied().unwrap_or(0)
    }

    pub fn mar(&self) -> usize {
        self.mar
    }

    pub fn mdr(&self) -> u8 {
        self.mdr
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
