use super::Interpreter;
use crate::error::RuntimeError;

use um_asm::{RegisterId, TrapReason, Word};

impl<I, O> Interpreter<I, O> {
    pub(crate) fn alu_set(&mut self, ra: RegisterId, value: Word) {
        self.registers[ra] = value;
    }

    pub(crate) fn alu_div(&mut self, ra: RegisterId, b: Word, c: Word) -> Result<(), RuntimeError> {
        let quotient = b.checked_div(c).ok_or(TrapReason::DivisionByZero)?;

        self.alu_set(ra, quotient);

        Ok(())
    }
}
