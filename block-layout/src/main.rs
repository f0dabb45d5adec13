use clap::Parser;

use block_layout::{run, GeneratorArgs, LayoutError};

fn main() -> Result<(), LayoutError> {
    env_logger::init();
    let args = GeneratorArgs::parse();
    let layout = run(&args)?;
    for row in layout.dump() {
        println!("{}", row);
    }
    Ok(())
}
