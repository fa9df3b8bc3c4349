use super::Interpreter;
use crate::consts::SEG_PROGRAM;
use crate::error::RuntimeError;

use um_asm::{TrapReason, Word};

use tracing::debug;

impl<I, O> Interpreter<I, O> {
    pub(crate) fn inc_pc(&mut self) -> Result<(), RuntimeError> {
        self.pc = self
            .pc
            .checked_add(1)
            .ok_or(TrapReason::ProgramCounterOverflow)?;

        Ok(())
    }

    /// Replace the program segment with a copy of segment `b`, then
    /// redirect the program counter to `c`.
    ///
    /// When `b` names segment 0 the image is already in place and the
    /// instruction degenerates to a jump.
    pub(crate) fn load_program(&mut self, b: Word, c: Word) -> Result<(), RuntimeError> {
        if b != SEG_PROGRAM {
            self.memory.duplicate_into_zero(b)?;

            debug!(source = b, pc = c, "program segment replaced");
        }

        self.pc = c;

        Ok(())
    }
}
