use crate::instruction::Instruction;
use crate::trap::TrapReason;
use crate::{Immediate25, RawInstruction, RegisterId};

use consts::*;

pub mod consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
/// Bare opcode representation, used for branching without operand decoding.
pub enum OpcodeRepr {
    /// Conditional move
    CMOV = 0x00,
    /// Segmented load
    SLOAD = 0x01,
    /// Segmented store
    SSTORE = 0x02,
    /// Wrapping addition
    ADD = 0x03,
    /// Wrapping multiplication
    MUL = 0x04,
    /// Truncating division
    DIV = 0x05,
    /// Bitwise not-and
    NAND = 0x06,
    /// Normal termination
    HALT = 0x07,
    /// Map a fresh segment
    MAP = 0x08,
    /// Unmap a segment
    UNMAP = 0x09,
    /// Emit one byte
    OUT = 0x0a,
    /// Consume one byte
    IN = 0x0b,
    /// Replace the program segment and jump
    LOADP = 0x0c,
    /// Load a 25-bit immediate
    LOADV = 0x0d,
    /// Reserved encoding space (14 and 15)
    RESERVED = 0x0e,
}

impl OpcodeRepr {
    /// Convert the opcode byte of a word into its representation.
    ///
    /// Total over `u8`; unassigned encodings fold into [`Self::RESERVED`].
    pub const fn from_u8(op: u8) -> Self {
        match op {
            OP_CMOV => Self::CMOV,
            OP_SLOAD => Self::SLOAD,
            OP_SSTORE => Self::SSTORE,
            OP_ADD => Self::ADD,
            OP_MUL => Self::MUL,
            OP_DIV => Self::DIV,
            OP_NAND => Self::NAND,
            OP_HALT => Self::HALT,
            OP_MAP => Self::MAP,
            OP_UNMAP => Self::UNMAP,
            OP_OUT => Self::OUT,
            OP_IN => Self::IN,
            OP_LOADP => Self::LOADP,
            OP_LOADV => Self::LOADV,
            _ => Self::RESERVED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Operand-carrying instruction representation, used to author programs.
///
/// The executor never constructs this type; its hot path branches on
/// [`OpcodeRepr`] over pre-extracted [`Instruction`] fields instead.
pub enum Opcode {
    /// If register C is non-zero, register A receives register B.
    CMOV(RegisterId, RegisterId, RegisterId),

    /// Register A receives the word at offset C of segment B.
    SLOAD(RegisterId, RegisterId, RegisterId),

    /// The word at offset B of segment A receives register C.
    SSTORE(RegisterId, RegisterId, RegisterId),

    /// Register A receives B plus C, modulo 2³².
    ADD(RegisterId, RegisterId, RegisterId),

    /// Register A receives B times C, modulo 2³².
    MUL(RegisterId, RegisterId, RegisterId),

    /// Register A receives B divided by C, truncated. Division by zero traps.
    DIV(RegisterId, RegisterId, RegisterId),

    /// Register A receives the complement of B and C.
    NAND(RegisterId, RegisterId, RegisterId),

    /// Terminate normally.
    HALT,

    /// Map a zero-filled segment of C words; its identifier lands in B.
    MAP(RegisterId, RegisterId),

    /// Unmap the segment named by C.
    UNMAP(RegisterId),

    /// Emit the byte in C. Values above 255 trap.
    OUT(RegisterId),

    /// Consume one byte into C; end-of-input stores `0xffff_ffff`.
    IN(RegisterId),

    /// Replace segment 0 with a copy of segment B (pure jump when B names
    /// segment 0), then set the program counter to C.
    LOADP(RegisterId, RegisterId),

    /// Register A receives the zero-extended 25-bit immediate.
    LOADV(RegisterId, Immediate25),
}

impl Opcode {
    /// Bare representation of this opcode.
    pub const fn opcode(&self) -> OpcodeRepr {
        match self {
            Self::CMOV(..) => OpcodeRepr::CMOV,
            Self::SLOAD(..) => OpcodeRepr::SLOAD,
            Self::SSTORE(..) => OpcodeRepr::SSTORE,
            Self::ADD(..) => OpcodeRepr::ADD,
            Self::MUL(..) => OpcodeRepr::MUL,
            Self::DIV(..) => OpcodeRepr::DIV,
            Self::NAND(..) => OpcodeRepr::NAND,
            Self::HALT => OpcodeRepr::HALT,
            Self::MAP(..) => OpcodeRepr::MAP,
            Self::UNMAP(..) => OpcodeRepr::UNMAP,
            Self::OUT(..) => OpcodeRepr::OUT,
            Self::IN(..) => OpcodeRepr::IN,
            Self::LOADP(..) => OpcodeRepr::LOADP,
            Self::LOADV(..) => OpcodeRepr::LOADV,
        }
    }

    /// Convert the opcode to bytes representation
    pub fn to_bytes(self) -> [u8; Instruction::LEN] {
        RawInstruction::from(self).to_be_bytes()
    }
}

impl From<Opcode> for RawInstruction {
    fn from(opcode: Opcode) -> RawInstruction {
        // Register indices are masked to their 3-bit fields and the
        // immediate to 25 bits; wider values are truncated.
        let pack3 = |op: u8, a: RegisterId, b: RegisterId, c: RegisterId| {
            ((op as RawInstruction) << 28)
                | (((a & 0x07) as RawInstruction) << 6)
                | (((b & 0x07) as RawInstruction) << 3)
                | ((c & 0x07) as RawInstruction)
        };

        match opcode {
            Opcode::CMOV(a, b, c) => pack3(OP_CMOV, a, b, c),
            Opcode::SLOAD(a, b, c) => pack3(OP_SLOAD, a, b, c),
            Opcode::SSTORE(a, b, c) => pack3(OP_SSTORE, a, b, c),
            Opcode::ADD(a, b, c) => pack3(OP_ADD, a, b, c),
            Opcode::MUL(a, b, c) => pack3(OP_MUL, a, b, c),
            Opcode::DIV(a, b, c) => pack3(OP_DIV, a, b, c),
            Opcode::NAND(a, b, c) => pack3(OP_NAND, a, b, c),
            Opcode::HALT => pack3(OP_HALT, 0, 0, 0),
            Opcode::MAP(b, c) => pack3(OP_MAP, 0, b, c),
            Opcode::UNMAP(c) => pack3(OP_UNMAP, 0, 0, c),
            Opcode::OUT(c) => pack3(OP_OUT, 0, 0, c),
            Opcode::IN(c) => pack3(OP_IN, 0, 0, c),
            Opcode::LOADP(b, c) => pack3(OP_LOADP, 0, b, c),
            Opcode::LOADV(a, imm) => {
                ((OP_LOADV as RawInstruction) << 28)
                    | (((a & 0x07) as RawInstruction) << 25)
                    | (imm & 0x01ff_ffff)
            }
        }
    }
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Instruction {
        RawInstruction::from(opcode).into()
    }
}

impl TryFrom<Instruction> for Opcode {
    type Error = TrapReason;

    fn try_from(parsed: Instruction) -> Result<Self, Self::Error> {
        let (repr, a, b, c, imm) = parsed.into_inner();

        match repr {
            OpcodeRepr::CMOV => Ok(Self::CMOV(a, b, c)),
            OpcodeRepr::SLOAD => Ok(Self::SLOAD(a, b, c)),
            OpcodeRepr::SSTORE => Ok(Self::SSTORE(a, b, c)),
            OpcodeRepr::ADD => Ok(Self::ADD(a, b, c)),
            OpcodeRepr::MUL => Ok(Self::MUL(a, b, c)),
            OpcodeRepr::DIV => Ok(Self::DIV(a, b, c)),
            OpcodeRepr::NAND => Ok(Self::NAND(a, b, c)),
            OpcodeRepr::HALT => Ok(Self::HALT),
            OpcodeRepr::MAP => Ok(Self::MAP(b, c)),
            OpcodeRepr::UNMAP => Ok(Self::UNMAP(c)),
            OpcodeRepr::OUT => Ok(Self::OUT(c)),
            OpcodeRepr::IN => Ok(Self::IN(c)),
            OpcodeRepr::LOADP => Ok(Self::LOADP(b, c)),
            OpcodeRepr::LOADV => Ok(Self::LOADV(a, imm)),
            OpcodeRepr::RESERVED => Err(TrapReason::InvalidOpcode),
        }
    }
}

impl TryFrom<RawInstruction> for Opcode {
    type Error = TrapReason;

    fn try_from(instruction: RawInstruction) -> Result<Self, Self::Error> {
        Instruction::from(instruction).try_into()
    }
}

impl FromIterator<Opcode> for Vec<u8> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Opcode>,
    {
        iter.into_iter().flat_map(Opcode::to_bytes).collect()
    }
}
