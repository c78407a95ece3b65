pub mod alu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod registers;
pub mod trace;
pub mod vm;

pub use error::Error;
pub use memory::Memory;
pub use vm::{Exit, State, StopHandle, Vm};
