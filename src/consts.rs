//! VM parameters

use um_asm::{SegmentId, Word};

use std::mem;

/// Register count of the machine
pub const VM_REGISTER_COUNT: usize = 8;

/// Segment identifier reserved for the executing program
pub const SEG_PROGRAM: SegmentId = 0;

/// Size of a machine word in bytes
pub const WORD_SIZE: usize = mem::size_of::<Word>();
