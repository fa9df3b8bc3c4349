use crate::instruction::Instruction;
use crate::RawInstruction;

use core::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[non_exhaustive]
/// Trap reason representation for the interpreter.
///
/// Every trap is fatal to the machine; the taxonomy exists so the failure
/// is surfaced at the point of discovery with a precise diagnostic.
pub enum TrapReason {
    /// The byte can't be mapped to any known `TrapReason`.
    UnknownTrapReason = 0x00,
    /// The opcode field holds one of the reserved encodings (14, 15).
    InvalidOpcode = 0x01,
    /// Division with a zero divisor.
    DivisionByZero = 0x02,
    /// Access to a segment identifier that is not currently mapped.
    SegmentNotMapped = 0x03,
    /// Access beyond the length of a mapped segment.
    SegmentOffsetOverflow = 0x04,
    /// Attempt to unmap segment 0, which holds the executing program.
    UnmapSegmentZero = 0x05,
    /// Instruction fetch outside the bounds of segment 0.
    ProgramCounterOverflow = 0x06,
    /// Output of a value that does not fit in one byte.
    OutputNotByte = 0x07,
    /// The 32-bit segment identifier space is exhausted.
    SegmentArenaFull = 0x08,
}

impl fmt::Display for TrapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for TrapReason {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<u8> for TrapReason {
    /// Converts the `u8` into a `TrapReason`.
    fn from(b: u8) -> Self {
        use TrapReason::*;
        match b {
            0x01 => InvalidOpcode,
            0x02 => DivisionByZero,
            0x03 => SegmentNotMapped,
            0x04 => SegmentOffsetOverflow,
            0x05 => UnmapSegmentZero,
            0x06 => ProgramCounterOverflow,
            0x07 => OutputNotByte,
            0x08 => SegmentArenaFull,
            _ => UnknownTrapReason,
        }
    }
}

impl From<TrapReason> for io::Error {
    fn from(reason: TrapReason) -> Self {
        io::Error::new(io::ErrorKind::Other, reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Describe a trap reason with the instruction that generated it
pub struct TrapEvent {
    reason: TrapReason,
    instruction: Instruction,
}

impl TrapEvent {
    /// Represents a trap described by a reason and an instruction.
    pub const fn new(reason: TrapReason, instruction: Instruction) -> Self {
        Self {
            reason,
            instruction,
        }
    }

    /// Underlying trap reason
    pub const fn reason(&self) -> &TrapReason {
        &self.reason
    }

    /// Underlying instruction
    pub const fn instruction(&self) -> &Instruction {
        &self.instruction
    }
}

impl fmt::Display for TrapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = RawInstruction::from(self.instruction);
        write!(f, "{} in instruction {raw:#010x}", self.reason)
    }
}
