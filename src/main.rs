use six502::{Memory, Program, Six502};
use std::{env, error::Error};

// jsr $4242; lda #$64 at the subroutine
const DEMO: &str = "\
FFFC: 20 42 42
4242: A9 64
";

// JSR (6) + LDA immediate (2)
const DEFAULT_BUDGET: i32 = 8;

// usage: six502 [IMAGE] [CYCLES]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let prog = match args.next() {
        Some(path) => Program::open(path)?,
        None => DEMO.parse()?,
    };
    let budget = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_BUDGET,
    };

    let mut mem = Memory::new();
    let mut cpu = Six502::new();
    cpu.reset(&mut mem);
    prog.load_into(&mut mem);

    println!("Starting program...");
    let used = cpu.execute(budget, &mut mem);
    println!("{cpu}");
    println!("{used} cycle(s) used");
    Ok(())
}
