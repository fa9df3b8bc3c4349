use crate::error::InterpreterError;
use crate::interpreter::Interpreter;
use crate::state::ExecuteState;

use std::io::{Read, Write};

impl<I, O> Interpreter<I, O>
where
    I: Read,
    O: Write,
{
    /// Run the loaded program to completion.
    ///
    /// Returns `Ok(())` on a normal halt. Any trap or host failure aborts
    /// the execution with the error describing it; the machine state is
    /// left as of the faulting instruction. The output sink is flushed
    /// before a normal return so emitted bytes are visible to the host.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        loop {
            match self.execute()? {
                ExecuteState::Proceed => (),

                ExecuteState::Halt => {
                    self.output.flush().map_err(InterpreterError::Io)?;

                    return Ok(());
                }
            }
        }
    }
}
