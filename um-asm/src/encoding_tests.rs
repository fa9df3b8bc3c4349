use crate::*;

use rstest::rstest;
use strum::IntoEnumIterator;

#[test]
fn three_register_fields_are_extracted() {
    // add r1, r2, r3
    let raw = (0x03u32 << 28) | (1 << 6) | (2 << 3) | 3;
    let parsed = Instruction::from(raw);

    assert_eq!(parsed.op(), 0x03);
    assert_eq!(parsed.ra(), 1);
    assert_eq!(parsed.rb(), 2);
    assert_eq!(parsed.rc(), 3);

    let (repr, a, b, c, _) = parsed.into_inner();
    assert_eq!(repr, OpcodeRepr::ADD);
    assert_eq!((a, b, c), (1, 2, 3));
}

#[test]
fn load_value_fields_are_extracted() {
    let imm: Immediate25 = 0x01ab_cdef;
    let raw = (0x0du32 << 28) | (5 << 25) | imm;
    let parsed = Instruction::from(raw);

    assert_eq!(parsed.rl(), 5);
    assert_eq!(parsed.imm(), imm);

    let (repr, a, _, _, value) = parsed.into_inner();
    assert_eq!(repr, OpcodeRepr::LOADV);
    assert_eq!(a, 5);
    assert_eq!(value, imm);
}

#[test]
fn unused_bits_are_ignored_and_zeroed_on_reencode() {
    let canonical = (0x06u32 << 28) | (7 << 6) | (0 << 3) | 4;
    let noisy = canonical | 0x0fff_fe00; // garbage in bits 9..27

    let parsed = Instruction::from(noisy);
    assert_eq!(parsed.into_inner(), Instruction::from(canonical).into_inner());
    assert_eq!(RawInstruction::from(parsed), canonical);
}

#[rstest]
#[case(Opcode::CMOV(1, 2, 3))]
#[case(Opcode::SLOAD(4, 5, 6))]
#[case(Opcode::SSTORE(7, 0, 1))]
#[case(Opcode::ADD(2, 3, 4))]
#[case(Opcode::MUL(5, 6, 7))]
#[case(Opcode::DIV(0, 1, 2))]
#[case(Opcode::NAND(3, 4, 5))]
#[case(Opcode::HALT)]
#[case(Opcode::MAP(6, 7))]
#[case(Opcode::UNMAP(1))]
#[case(Opcode::OUT(2))]
#[case(Opcode::IN(3))]
#[case(Opcode::LOADP(4, 5))]
#[case(Opcode::LOADV(6, 0x00c0_ffee))]
fn opcode_to_raw_round_trip(#[case] opcode: Opcode) {
    let raw = RawInstruction::from(opcode);
    let back = Opcode::try_from(raw).expect("valid instruction");

    assert_eq!(opcode, back);
    assert_eq!(opcode.to_bytes(), raw.to_be_bytes());
    assert_eq!(raw >> 28, opcode.opcode() as u32);
}

#[test]
fn reserved_opcodes_are_rejected() {
    for op in [0x0eu32, 0x0f] {
        let raw = (op << 28) | 0x0012_3456;

        let parsed = Instruction::from(raw);
        assert_eq!(parsed.into_inner().0, OpcodeRepr::RESERVED);
        assert_eq!(Opcode::try_from(raw), Err(TrapReason::InvalidOpcode));
    }
}

#[test]
fn opcode_repr_from_u8_is_total() {
    let assigned: Vec<OpcodeRepr> = OpcodeRepr::iter()
        .filter(|repr| *repr != OpcodeRepr::RESERVED)
        .collect();

    for (byte, repr) in assigned.iter().enumerate() {
        assert_eq!(OpcodeRepr::from_u8(byte as u8), *repr);
    }
    for byte in assigned.len() as u8..=255 {
        assert_eq!(OpcodeRepr::from_u8(byte), OpcodeRepr::RESERVED);
    }
}

/// Decoding is a canonicalization: once an instruction has been re-encoded,
/// decoding it again is the identity.
#[test]
fn reencode_is_a_fixpoint() {
    for mask in [0, u32::MAX, 0xaaaa_aaaa, 0x5555_5555] {
        for op in 0..=0x0fu32 {
            let raw = (op << 28) | (mask & 0x0fff_ffff);

            let canonical = RawInstruction::from(Instruction::from(raw));
            let again = RawInstruction::from(Instruction::from(canonical));

            assert_eq!(canonical, again);
            assert_eq!(canonical >> 28, op);
        }
    }
}

#[test]
fn instruction_from_bytes_requires_a_full_word() {
    let bytes = Opcode::LOADV(1, 66).to_bytes();

    let parsed = Instruction::from_bytes(&bytes).expect("enough bytes");
    assert_eq!(parsed, Instruction::from(bytes));

    assert!(Instruction::from_bytes(&bytes[..3]).is_err());
}

#[test]
fn program_images_assemble_from_opcodes() {
    let image: Vec<u8> = vec![Opcode::LOADV(1, 66), Opcode::OUT(1), Opcode::HALT]
        .into_iter()
        .collect();

    assert_eq!(image.len(), 3 * Instruction::LEN);
    assert_eq!(image[..4], Opcode::LOADV(1, 66).to_bytes());
    assert_eq!(image[8..], Opcode::HALT.to_bytes());
}
