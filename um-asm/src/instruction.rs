use crate::opcode::consts::*;
use crate::opcode::OpcodeRepr;
use crate::{Immediate25, RawInstruction, RegisterId};

use std::io;

/// A decoded instruction word that can be executed without further branching.
///
/// Every candidate operand field is pre-extracted; which of them carry
/// meaning is decided by the opcode alone. Bits 9..27 of the
/// three-register form are ignored on decode and zeroed on re-encode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Opcode, top 4 bits
    op: u8,
    /// Register A of the three-register form, bits 6..8
    ra: RegisterId,
    /// Register B of the three-register form, bits 3..5
    rb: RegisterId,
    /// Register C of the three-register form, bits 0..2
    rc: RegisterId,
    /// Register A of the load-value form, bits 25..27
    rl: RegisterId,
    /// Immediate of the load-value form, bits 0..24
    imm: Immediate25,
}

impl Instruction {
    /// Size of an instruction in bytes
    pub const LEN: usize = 4;

    /// Extracts fields from a raw instruction
    pub const fn new(instruction: RawInstruction) -> Self {
        let op = (instruction >> 28) as u8;

        let ra = ((instruction >> 6) & 0x07) as RegisterId;
        let rb = ((instruction >> 3) & 0x07) as RegisterId;
        let rc = (instruction & 0x07) as RegisterId;

        let rl = ((instruction >> 25) & 0x07) as RegisterId;
        let imm = instruction & 0x01ff_ffff;

        Self {
            op,
            ra,
            rb,
            rc,
            rl,
            imm,
        }
    }

    /// Opcode
    pub const fn op(&self) -> u8 {
        self.op
    }

    /// Register A of the three-register form
    pub const fn ra(&self) -> RegisterId {
        self.ra
    }

    /// Register B of the three-register form
    pub const fn rb(&self) -> RegisterId {
        self.rb
    }

    /// Register C of the three-register form
    pub const fn rc(&self) -> RegisterId {
        self.rc
    }

    /// Register A of the load-value form
    pub const fn rl(&self) -> RegisterId {
        self.rl
    }

    /// Immediate of the load-value form
    pub const fn imm(&self) -> Immediate25 {
        self.imm
    }

    /// Convert the instruction to bytes representation
    pub fn to_bytes(self) -> [u8; Self::LEN] {
        RawInstruction::from(self).to_be_bytes()
    }

    /// Convert the instruction into its internal representation
    ///
    /// `(repr, A, B, C, immediate)` — the A slot holds the load-value
    /// register when the opcode is the load-value form.
    pub const fn into_inner(
        self,
    ) -> (
        OpcodeRepr,
        RegisterId,
        RegisterId,
        RegisterId,
        Immediate25,
    ) {
        let Self {
            op,
            ra,
            rb,
            rc,
            rl,
            imm,
        } = self;

        let repr = OpcodeRepr::from_u8(op);

        let ra = if op == OP_LOADV { rl } else { ra };

        (repr, ra, rb, rc, imm)
    }
}

impl From<RawInstruction> for Instruction {
    fn from(instruction: RawInstruction) -> Self {
        Self::new(instruction)
    }
}

impl From<[u8; Instruction::LEN]> for Instruction {
    fn from(instruction: [u8; Instruction::LEN]) -> Self {
        RawInstruction::from_be_bytes(instruction).into()
    }
}

impl From<Instruction> for RawInstruction {
    fn from(parsed: Instruction) -> RawInstruction {
        let op = (parsed.op as RawInstruction) << 28;

        if parsed.op == OP_LOADV {
            op | ((parsed.rl as RawInstruction) << 25) | parsed.imm
        } else {
            op | ((parsed.ra as RawInstruction) << 6)
                | ((parsed.rb as RawInstruction) << 3)
                | (parsed.rc as RawInstruction)
        }
    }
}

impl Instruction {
    /// Create an `Instruction` from a slice of bytes
    ///
    /// This function will fail if the length of the bytes is smaller than
    /// [`Instruction::LEN`].
    pub fn from_bytes(bytes: &[u8]) -> io::Result<Self> {
        bytes
            .get(..Self::LEN)
            .and_then(|chunk| <[u8; Self::LEN]>::try_from(chunk).ok())
            .map(Self::from)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "The provided buffer is not big enough!",
                )
            })
    }
}
