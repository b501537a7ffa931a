use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use anyhow::{Context, Result};
use seq_io::fasta::{Reader, Record};

use crate::alphabet::{Alphabet, UnknownCodeError, UnknownSymbolError};

const UTF8_SPACE: u8 = 32;

/// This holds both the "digital" data and the string data of a
/// biological sequence.
///
/// Sequences are immutable once constructed and indexed from 0.
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The "digital" data of the sequence: the symbols mapped to
    /// alphabet codes
    pub codes: Vec<u8>,
    /// The string data of the sequence: the upper case UTF8 bytes of
    /// the symbols
    pub utf8_bytes: Vec<u8>,
}

impl Sequence {
    /// Read every record in a FASTA file, encoding residues through the
    /// given alphabet.
    pub fn from_fasta<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!("failed to open fasta: {}", path.as_ref().to_string_lossy())
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let mut codes: Vec<u8> = vec![];
            for line in record.seq_lines() {
                for &utf8_byte in line {
                    codes.push(alphabet.code(utf8_byte)?);
                }
            }

            let seq = Self::from_codes(codes, alphabet)?;

            seqs.push(Sequence { name, details, ..seq });
        }

        Ok(seqs)
    }

    /// Build a sequence from UTF8 symbol bytes, case-insensitively.
    pub fn from_utf8(bytes: &[u8], alphabet: &Alphabet) -> Result<Self, UnknownSymbolError> {
        let codes: Vec<u8> = bytes
            .iter()
            .map(|&byte| alphabet.code(byte))
            .collect::<Result<_, _>>()?;

        // every code we just produced maps back to a symbol
        Ok(Self::from_codes(codes, alphabet).unwrap())
    }

    /// Build a sequence from alphabet codes.
    pub fn from_codes(codes: Vec<u8>, alphabet: &Alphabet) -> Result<Self, UnknownCodeError> {
        let utf8_bytes: Vec<u8> = codes
            .iter()
            .map(|&code| alphabet.symbol(code))
            .collect::<Result<_, _>>()?;

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            length: codes.len(),
            codes,
            utf8_bytes,
        })
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.utf8_bytes.chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", std::str::from_utf8(&self.utf8_bytes).unwrap())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_utf8_round_trip() -> anyhow::Result<()> {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_utf8(b"acgTA", &alphabet)?;

        assert_eq!(seq.length, 5);
        assert_eq!(seq.codes, vec![0, 1, 2, 3, 0]);
        assert_eq!(seq.utf8_bytes, b"ACGTA");

        Ok(())
    }

    #[test]
    fn test_from_utf8_unknown_symbol() {
        let alphabet = Alphabet::dna();
        assert!(Sequence::from_utf8(b"ACGU", &alphabet).is_err());
    }

    #[test]
    fn test_empty_sequence() -> anyhow::Result<()> {
        let alphabet = Alphabet::dna();
        let seq = Sequence::from_utf8(b"", &alphabet)?;

        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);

        Ok(())
    }
}
