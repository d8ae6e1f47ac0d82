use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dotmatrix_cpu::{Cpu, FlatMemory, Registers};

const USAGE: &str = "Usage: dm_trace <image> [steps] [load_addr]";

fn parse_u16(text: &str) -> Result<u16> {
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("$")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    };
    value.with_context(|| format!("invalid address '{text}'"))
}

fn print_registers(regs: &Registers) {
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp(),
        regs.pc()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(image_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let steps: u64 = match args.next() {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid step count '{text}'"))?,
        None => 1_000,
    };
    let load_addr = match args.next() {
        Some(text) => parse_u16(&text)?,
        None => 0x0000,
    };

    let image = std::fs::read(&image_path)
        .with_context(|| format!("failed to read image '{}'", image_path.display()))?;
    if image.len() > dotmatrix_cpu::ADDRESS_SPACE {
        bail!(
            "image '{}' is {} bytes, larger than the 64 KiB address space",
            image_path.display(),
            image.len()
        );
    }

    let mut memory = FlatMemory::new();
    memory.load(load_addr, &image);

    let mut cpu = Cpu::new();
    cpu.regs.set_pc(load_addr);

    let mut executed = 0;
    while executed < steps {
        if let Err(err) = cpu.step(&mut memory) {
            println!("Stopped after {executed} instructions: {err}");
            break;
        }
        executed += 1;
    }
    if executed == steps {
        println!("Executed {executed} instructions");
    }

    print_registers(&cpu.regs);
    println!("IME={} power={:?}", cpu.ime() as u8, cpu.power_state());
    Ok(())
}
