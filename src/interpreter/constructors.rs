//! Exposed constructors API for the [`Interpreter`]

use super::{Interpreter, SegmentMemory};
use crate::consts::*;

use std::io::{self, BufWriter, Stdin, Stdout};

impl<I, O> Interpreter<I, O> {
    /// Create a new interpreter instance over a byte source and sink.
    ///
    /// The machine starts with zeroed registers, an empty program segment
    /// and the program counter at 0.
    pub fn with_io(input: I, output: O) -> Self {
        Self {
            registers: [0; VM_REGISTER_COUNT],
            memory: SegmentMemory::default(),
            pc: 0,
            input,
            output,
        }
    }
}

impl<I, O> Default for Interpreter<I, O>
where
    I: Default,
    O: Default,
{
    fn default() -> Self {
        Self::with_io(Default::default(), Default::default())
    }
}

impl Interpreter<io::Empty, io::Sink> {
    /// Create a new interpreter without attached devices.
    ///
    /// Input yields end-of-input immediately; output is discarded.
    pub fn without_io() -> Self {
        Self::with_io(io::empty(), io::sink())
    }
}

impl Interpreter<Stdin, BufWriter<Stdout>> {
    /// Create a new interpreter over the host standard streams.
    ///
    /// Output is buffered; [`Interpreter::run`] flushes it on exit.
    pub fn with_stdio() -> Self {
        Self::with_io(io::stdin(), BufWriter::new(io::stdout()))
    }
}
