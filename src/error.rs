//! Runtime interpreter error implementation

use um_asm::{Instruction, TrapEvent, TrapReason};

use std::io;
use thiserror::Error;

/// Interpreter runtime error variants.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The execution trapped while running an instruction, caused by the
    /// machine state the instruction observed.
    #[error("Execution trap: {0}")]
    TrapInstruction(TrapEvent),
    /// The execution trapped outside of an instruction context, e.g. while
    /// fetching the next word from segment 0.
    #[error("Execution trap: {0}")]
    Trap(TrapReason),
    /// I/O and OS related errors.
    #[error("Unrecoverable error: {0}")]
    Io(#[from] io::Error),
}

impl InterpreterError {
    /// Attach the faulting instruction to a runtime error.
    pub fn from_runtime(error: RuntimeError, instruction: Instruction) -> Self {
        match error {
            RuntimeError::Trap(reason) => Self::TrapInstruction(TrapEvent::new(reason, instruction)),
            RuntimeError::Halt(e) => Self::Io(e),
        }
    }

    /// Return the specified trap reason that caused this error, if applicable.
    pub const fn trap_reason(&self) -> Option<TrapReason> {
        match self {
            Self::TrapInstruction(event) => Some(*event.reason()),
            Self::Trap(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Return the instruction that caused this error, if applicable.
    pub const fn instruction(&self) -> Option<&Instruction> {
        match self {
            Self::TrapInstruction(event) => Some(event.instruction()),
            _ => None,
        }
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(error: RuntimeError) -> Self {
        match error {
            RuntimeError::Trap(reason) => Self::Trap(reason),
            RuntimeError::Halt(e) => Self::Io(e),
        }
    }
}

impl From<TrapReason> for InterpreterError {
    fn from(reason: TrapReason) -> Self {
        Self::Trap(reason)
    }
}

/// Runtime error description that distinguishes machine traps from host
/// failures. Both halt the execution; only traps carry a machine-level
/// reason that can be attached to the faulting instruction.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Machine trap with a well-defined reason.
    #[error("{0}")]
    Trap(TrapReason),
    /// Unspecified host failure that halts the execution.
    #[error(transparent)]
    Halt(io::Error),
}

impl RuntimeError {
    /// Flag whether the error is a machine trap.
    pub const fn is_trap(&self) -> bool {
        matches!(self, Self::Trap(_))
    }
}

impl From<TrapReason> for RuntimeError {
    fn from(reason: TrapReason) -> Self {
        RuntimeError::Trap(reason)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Halt(e)
    }
}
