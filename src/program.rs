//! Program image loading
//!
//! A program is a flat byte file whose length is a positive multiple of the
//! word size; each 4-byte group encodes one instruction word, most
//! significant byte first. The decoded image becomes segment 0.

use crate::consts::WORD_SIZE;

use um_asm::{Opcode, RawInstruction, Word};

use itertools::Itertools;
use std::io::{self, Read};
use thiserror::Error;

/// Errors surfaced while loading a program image.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// The image contains no words at all.
    #[error("the program image is empty")]
    Empty,
    /// The image length isn't divisible into whole big-endian words.
    #[error("the program image length {0} is not a multiple of the word size")]
    TruncatedWord(usize),
    /// The image couldn't be read from its source.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Decoded program image: the initial contents of segment 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Decode an image from its byte representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProgramError> {
        if bytes.is_empty() {
            return Err(ProgramError::Empty);
        }

        if bytes.len() % WORD_SIZE != 0 {
            return Err(ProgramError::TruncatedWord(bytes.len()));
        }

        let words = bytes
            .iter()
            .copied()
            .tuples()
            .map(|(a, b, c, d)| Word::from_be_bytes([a, b, c, d]))
            .collect();

        Ok(Self { words })
    }

    /// Decode an image from a byte source, e.g. an open program file.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, ProgramError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Self::from_bytes(&bytes)
    }

    /// The decoded instruction words, in file order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the image holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn into_words(self) -> Vec<Word> {
        self.words
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl FromIterator<Opcode> for Program {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Opcode>,
    {
        let words = iter.into_iter().map(RawInstruction::from).collect();

        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_decode_most_significant_byte_first() {
        let program = Program::from_bytes(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x2a])
            .expect("aligned image");

        assert_eq!(program.words(), &[0xdead_beef, 0x0000_002a]);
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn empty_images_are_rejected() {
        assert!(matches!(Program::from_bytes(&[]), Err(ProgramError::Empty)));
    }

    #[test]
    fn misaligned_images_are_rejected() {
        let image = [0u8; 7];

        assert!(matches!(
            Program::from_bytes(&image),
            Err(ProgramError::TruncatedWord(7))
        ));
    }

    #[test]
    fn reader_and_bytes_agree() {
        let image = Opcode::HALT.to_bytes();

        let from_reader = Program::from_reader(&image[..]).expect("readable image");
        let from_bytes = Program::from_bytes(&image).expect("aligned image");

        assert_eq!(from_reader, from_bytes);
    }
}
