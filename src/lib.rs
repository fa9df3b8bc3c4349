//! 32-bit Universal Machine interpreter.
//!
//! A bytecode interpreter for a fixed 14-instruction register machine over
//! segmented memory: eight 32-bit registers, an arena of dynamically mapped
//! word segments with LIFO identifier reuse, and byte-granular input and
//! output devices. Programs are flat images of big-endian instruction
//! words; execution proceeds from segment 0 until a halt instruction or a
//! fatal trap.

pub mod consts;
pub mod error;
pub mod interpreter;
pub mod program;
pub mod state;

pub mod prelude {
    //! Required implementations for full functionality of this crate.

    pub use um_asm::{
        Immediate25, Instruction, Opcode, OpcodeRepr, RawInstruction, RegisterId, SegmentId,
        TrapEvent, TrapReason, Word,
    };

    pub use crate::error::{InterpreterError, RuntimeError};
    pub use crate::interpreter::{Interpreter, SegmentMemory};
    pub use crate::program::{Program, ProgramError};
    pub use crate::state::ExecuteState;
}
