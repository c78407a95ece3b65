use ls8::opcode::{HLT, LDI, MUL, POP, PRN, PUSH};
use ls8::registers::SP_INIT;
use ls8::{loader, Exit, Memory, State, Vm};
use proptest::prelude::*;

fn run_image(memory: Memory) -> Vm<Vec<u8>> {
    let mut vm = Vm::new(memory, Vec::new());
    assert_eq!(vm.run().unwrap(), Exit::Halted);
    vm
}

fn run_bytes(program: &[u8]) -> Vm<Vec<u8>> {
    run_image(Memory::from_image(program).unwrap())
}

fn printed(vm: &Vm<Vec<u8>>) -> String {
    String::from_utf8(vm.output().clone()).unwrap()
}

#[test]
fn print8_program() {
    let vm = run_image(loader::parse(include_str!("../programs/print8.ls8")).unwrap());
    assert_eq!(printed(&vm), "8\n");
    assert_eq!(vm.state(), State::Halted);
    assert_eq!(vm.registers().get(0).unwrap(), 8);
}

#[test]
fn mult_program() {
    let vm = run_image(loader::parse(include_str!("../programs/mult.ls8")).unwrap());
    assert_eq!(printed(&vm), "90\n");
    assert_eq!(vm.registers().get(0).unwrap(), 90);
}

#[test]
fn stack_program() {
    let vm = run_image(loader::parse(include_str!("../programs/stack.ls8")).unwrap());
    assert_eq!(printed(&vm), "5\n");
    assert_eq!(vm.registers().sp(), SP_INIT);
}

#[test]
fn load_file_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/programs/print8.ls8");
    let memory = loader::load_file(path).unwrap();
    assert_eq!(&memory.as_slice()[..6], &[0x82, 0, 8, 0x47, 0, 0x01]);
}

proptest! {
    #[test]
    fn ldi_then_prn_prints_value(r in 0u8..8, v in any::<u8>()) {
        let vm = run_bytes(&[LDI, r, v, PRN, r, HLT]);
        prop_assert_eq!(printed(&vm), format!("{v}\n"));
    }

    #[test]
    fn mul_wraps(a in any::<u8>(), b in any::<u8>()) {
        let vm = run_bytes(&[LDI, 0, a, LDI, 1, b, MUL, 0, 1, HLT]);
        prop_assert_eq!(vm.registers().get(0).unwrap(), ((a as u32 * b as u32) % 256) as u8);
        prop_assert_eq!(vm.registers().get(1).unwrap(), b);
    }

    #[test]
    fn push_then_pop_restores_sp(r in 0u8..7, r2 in 0u8..7, v in any::<u8>()) {
        let vm = run_bytes(&[LDI, r, v, PUSH, r, POP, r2, HLT]);
        prop_assert_eq!(vm.registers().sp(), SP_INIT);
        prop_assert_eq!(vm.registers().get(r2).unwrap(), v);
    }

    #[test]
    fn unknown_opcode_skips_one_byte(op in any::<u8>()) {
        prop_assume!(ls8::opcode::Instruction::decode(op).is_none());
        let mut vm = Vm::new(Memory::from_image(&[op, HLT]).unwrap(), Vec::new());
        prop_assert_eq!(vm.step().unwrap(), State::Running);
        prop_assert_eq!(vm.pc(), 1);
        prop_assert_eq!(vm.invalid_opcodes().len(), 1);
        prop_assert_eq!(vm.run().unwrap(), Exit::Halted);
        prop_assert_eq!(vm.invalid_opcodes().len(), 1);
    }
}
