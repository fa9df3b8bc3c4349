//! Byte values of the instruction set opcodes

/// Conditional move
pub const OP_CMOV: u8 = 0x00;

/// Segmented load
pub const OP_SLOAD: u8 = 0x01;

/// Segmented store
pub const OP_SSTORE: u8 = 0x02;

/// Wrapping addition
pub const OP_ADD: u8 = 0x03;

/// Wrapping multiplication
pub const OP_MUL: u8 = 0x04;

/// Truncating division
pub const OP_DIV: u8 = 0x05;

/// Bitwise not-and
pub const OP_NAND: u8 = 0x06;

/// Normal termination
pub const OP_HALT: u8 = 0x07;

/// Map a fresh segment
pub const OP_MAP: u8 = 0x08;

/// Unmap a segment
pub const OP_UNMAP: u8 = 0x09;

/// Emit one byte
pub const OP_OUT: u8 = 0x0a;

/// Consume one byte
pub const OP_IN: u8 = 0x0b;

/// Replace the program segment and jump
pub const OP_LOADP: u8 = 0x0c;

/// Load a 25-bit immediate
pub const OP_LOADV: u8 = 0x0d;
