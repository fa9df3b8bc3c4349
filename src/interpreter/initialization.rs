use super::{Interpreter, SegmentMemory};
use crate::program::Program;

use tracing::debug;

impl<I, O> Interpreter<I, O> {
    /// Install `program` as segment 0 and reset the machine state.
    ///
    /// Registers are zeroed and the program counter returns to 0; any
    /// previously mapped segments are released.
    pub fn init(&mut self, program: Program) {
        let words = program.into_words();

        debug!(words = words.len(), "program installed");

        self.registers.iter_mut().for_each(|r| *r = 0);
        self.pc = 0;
        self.memory = SegmentMemory::new(words);
    }
}
