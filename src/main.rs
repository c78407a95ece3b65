use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ls8::{loader, Exit, Vm};

#[derive(Parser)]
#[command(version, about = "LS-8 emulator", arg_required_else_help(true))]
struct Args {
    /// Program image (.ls8)
    program: PathBuf,

    /// Dump CPU state to stderr before every instruction
    #[arg(short, long)]
    trace: bool,

    /// Stop after this many instructions
    #[arg(long)]
    max_cycles: Option<u64>,
}

fn run(args: Args) -> anyhow::Result<Exit> {
    let memory = loader::load_file(&args.program)
        .with_context(|| format!("loading {}", args.program.display()))?;

    let mut vm = Vm::new(memory, BufWriter::new(io::stdout().lock()));
    if args.trace {
        vm = vm.with_trace(Box::new(io::stderr()));
    }
    if let Some(max) = args.max_cycles {
        vm = vm.with_max_cycles(max);
    }

    let exit = vm
        .run()
        .with_context(|| format!("fault at pc {:#04x}", vm.pc()))?;
    let stdout = vm.into_output().into_inner().map_err(|e| e.into_error())?;
    drop(stdout);
    Ok(exit)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(Exit::Halted) => ExitCode::SUCCESS,
        Ok(Exit::Stopped) => {
            eprintln!("Stopped before HLT");
            ExitCode::from(2)
        }
        Ok(Exit::Faulted) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
