//! Command-line entry point: execute a Universal Machine program image.
//!
//! Takes a single positional argument, the path to the image. Exits with
//! status 0 on a normal halt and non-zero with a one-line diagnostic on a
//! usage error, an unreadable or malformed image, or any runtime failure.

use um_vm::prelude::*;

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);

    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: um <program.um>");
        return ExitCode::FAILURE;
    };

    match execute(&path) {
        Ok(()) => ExitCode::SUCCESS,

        Err(e) => {
            eprintln!("um: {path}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(path: &str) -> Result<(), Box<dyn Error>> {
    let image = File::open(path).map(BufReader::new)?;
    let program = Program::from_reader(image)?;

    let mut vm = Interpreter::with_stdio();
    vm.init(program);
    vm.run()?;

    Ok(())
}
