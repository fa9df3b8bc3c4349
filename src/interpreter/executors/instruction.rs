use crate::error::{InterpreterError, RuntimeError};
use crate::interpreter::Interpreter;
use crate::state::ExecuteState;

use um_asm::{Instruction, OpcodeRepr, TrapReason};

use std::io::{Read, Write};

impl<I, O> Interpreter<I, O>
where
    I: Read,
    O: Write,
{
    /// Fetch, decode and execute the instruction under the program counter.
    pub fn execute(&mut self) -> Result<ExecuteState, InterpreterError> {
        let word = self.memory.fetch(self.pc).map_err(InterpreterError::Trap)?;

        self.instruction(Instruction::from(word))
    }

    /// Execute a decoded instruction against the current state.
    pub fn instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<ExecuteState, InterpreterError> {
        self._instruction(instruction)
            .map_err(|e| InterpreterError::from_runtime(e, instruction))
    }

    fn _instruction(&mut self, instruction: Instruction) -> Result<ExecuteState, RuntimeError> {
        let (op, ra, rb, rc, imm) = instruction.into_inner();
        let (a, b, c) = (
            self.registers[ra],
            self.registers[rb],
            self.registers[rc],
        );

        match op {
            OpcodeRepr::CMOV => {
                if c != 0 {
                    self.alu_set(ra, b);
                }
            }

            OpcodeRepr::SLOAD => {
                self.segmented_load(ra, b, c)?;
            }

            OpcodeRepr::SSTORE => {
                self.segmented_store(a, b, c)?;
            }

            OpcodeRepr::ADD => {
                self.alu_set(ra, b.wrapping_add(c));
            }

            OpcodeRepr::MUL => {
                self.alu_set(ra, b.wrapping_mul(c));
            }

            OpcodeRepr::DIV => {
                self.alu_div(ra, b, c)?;
            }

            OpcodeRepr::NAND => {
                self.alu_set(ra, !(b & c));
            }

            OpcodeRepr::HALT => {
                return Ok(ExecuteState::Halt);
            }

            OpcodeRepr::MAP => {
                self.map_segment(rb, c)?;
            }

            OpcodeRepr::UNMAP => {
                self.unmap_segment(c)?;
            }

            OpcodeRepr::OUT => {
                self.output_byte(c)?;
            }

            OpcodeRepr::IN => {
                self.input_byte(rc)?;
            }

            OpcodeRepr::LOADP => {
                // The program counter is redirected by the instruction
                // itself and must not be advanced afterwards.
                self.load_program(b, c)?;

                return Ok(ExecuteState::Proceed);
            }

            OpcodeRepr::LOADV => {
                self.alu_set(ra, imm);
            }

            OpcodeRepr::RESERVED => {
                return Err(TrapReason::InvalidOpcode.into());
            }
        }

        self.inc_pc()?;

        Ok(ExecuteState::Proceed)
    }
}
