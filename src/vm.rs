use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::alu;
use crate::error::Error;
use crate::memory::Memory;
use crate::opcode::{operand_count, Instruction};
use crate::registers::Registers;
use crate::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Faulted,
}

/// Why [`Vm::run`] returned control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Halted,
    /// Stop was requested or the cycle limit was hit. Calling `run` again resumes.
    Stopped,
    /// The engine faulted on an earlier call and will not execute further.
    Faulted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidOpcode {
    pub pc: usize,
    pub opcode: u8,
}

/// Requests that a running [`Vm`] return before its next fetch.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

pub struct Vm<W: Write> {
    memory: Memory,
    registers: Registers,
    pc: usize,
    state: State,
    out: W,
    trace: Option<Box<dyn Write>>,
    max_cycles: Option<u64>,
    cycles: u64,
    stop: StopHandle,
    invalid_opcodes: Vec<InvalidOpcode>,
}

impl<W: Write> Vm<W> {
    /// `memory` must already hold the program at address 0. PRN writes to `out`.
    pub fn new(memory: Memory, out: W) -> Vm<W> {
        Vm {
            memory,
            registers: Registers::new(),
            pc: 0,
            state: State::Running,
            out,
            trace: None,
            max_cycles: None,
            cycles: 0,
            stop: StopHandle::default(),
            invalid_opcodes: Vec::new(),
        }
    }

    pub fn with_trace(mut self, sink: Box<dyn Write>) -> Vm<W> {
        self.trace = Some(sink);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: u64) -> Vm<W> {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn invalid_opcodes(&self) -> &[InvalidOpcode] {
        &self.invalid_opcodes
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<Exit, Error> {
        loop {
            if self.stop.take() {
                return Ok(Exit::Stopped);
            }
            if self.max_cycles.is_some_and(|max| self.cycles >= max) {
                return Ok(Exit::Stopped);
            }
            match self.step()? {
                State::Running => {}
                State::Halted => {
                    self.out.flush()?;
                    return Ok(Exit::Halted);
                }
                State::Faulted => return Ok(Exit::Faulted),
            }
        }
    }

    /// Executes one instruction. A fault leaves the engine in [`State::Faulted`];
    /// stepping a halted or faulted engine does nothing.
    pub fn step(&mut self) -> Result<State, Error> {
        if self.state != State::Running {
            return Ok(self.state);
        }
        self.cycles += 1;
        match self.execute() {
            Ok(()) => Ok(self.state),
            Err(e) => {
                self.state = State::Faulted;
                Err(e)
            }
        }
    }

    fn execute(&mut self) -> Result<(), Error> {
        if let Some(sink) = self.trace.as_mut() {
            trace::write_line(sink, self.pc, &self.memory, &self.registers)?;
        }

        let opcode = self.memory.read(self.pc)?;
        let Some(instruction) = Instruction::decode(opcode) else {
            eprintln!("Invalid opcode {:#04x} at {:#04x}", opcode, self.pc);
            self.invalid_opcodes.push(InvalidOpcode {
                pc: self.pc,
                opcode,
            });
            self.pc += 1;
            return Ok(());
        };

        let count = operand_count(opcode);
        let mut operands = [0u8; 2];
        for (i, operand) in operands.iter_mut().take(count).enumerate() {
            *operand = self.memory.read(self.pc + 1 + i)?;
        }
        let [a, b] = operands;

        match instruction {
            Instruction::Hlt => {
                self.state = State::Halted;
                return Ok(());
            }
            Instruction::Ldi => self.registers.set(a, b)?,
            Instruction::Prn => {
                let value = self.registers.get(a)?;
                writeln!(self.out, "{}", value)?;
            }
            // SP is r7, so PUSH r7 stores the decremented SP and POP r7
            // leaves SP one past the popped value
            Instruction::Push => {
                let sp = self
                    .registers
                    .sp()
                    .checked_sub(1)
                    .ok_or(Error::StackOverflow)?;
                self.registers.set_sp(sp);
                let value = self.registers.get(a)?;
                // the stack shares memory with the program and may overwrite it
                self.memory.write(sp as usize, value)?;
            }
            Instruction::Pop => {
                let value = self.memory.read(self.registers.sp() as usize)?;
                self.registers.set(a, value)?;
                let next = self
                    .registers
                    .sp()
                    .checked_add(1)
                    .ok_or(Error::StackUnderflow)?;
                self.registers.set_sp(next);
            }
            Instruction::Alu(op) => alu::apply(op, &mut self.registers, a, b)?,
        }

        self.pc += count + 1;
        Ok(())
    }
}
