use phf::phf_map;
use thiserror::Error;

pub const UTF8_DASH: u8 = 45;

/// maps UTF8 residue bytes (upper and lower case) to DNA alphabet codes
pub const UTF8_TO_DIGITAL_DNA: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 0,  // A
    67u8 => 1,  // C
    71u8 => 2,  // G
    84u8 => 3,  // T
    // lower case
    97u8 => 0,  // a
    99u8 => 1,  // c
    103u8 => 2, // g
    116u8 => 3, // t
    // the gap symbol is always the last alphabet entry
    45u8 => 4,  // -
};

#[derive(Error, Debug)]
#[error("unknown sequence symbol: {}", char::from(*.byte))]
pub struct UnknownSymbolError {
    pub byte: u8,
}

#[derive(Error, Debug)]
#[error("unknown alphabet code: {code}")]
pub struct UnknownCodeError {
    pub code: u8,
}

#[derive(Error, Debug)]
#[error("duplicate alphabet symbol: {symbol}")]
pub struct DuplicateSymbolError {
    pub symbol: char,
}

/// A bijective mapping between sequence symbols and small integer codes.
///
/// The gap symbol `-` is always present and always maps to the highest
/// code. Symbol lookup is case-insensitive; decoding always produces
/// upper case symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    /// The upper case UTF8 byte for each code, gap last
    symbols: Vec<u8>,
    /// Maps UTF8 bytes back to codes
    codes: [Option<u8>; 256],
}

impl Alphabet {
    /// Build an alphabet from the given symbols, appending the gap
    /// symbol as the final entry.
    pub fn new(symbols: &[u8]) -> Result<Self, DuplicateSymbolError> {
        let mut alphabet = Self {
            symbols: Vec::with_capacity(symbols.len() + 1),
            codes: [None; 256],
        };

        for &byte in symbols.iter().chain(std::iter::once(&UTF8_DASH)) {
            alphabet.push_symbol(byte)?;
        }

        Ok(alphabet)
    }

    /// The {A, C, G, T, -} alphabet.
    pub fn dna() -> Self {
        let mut alphabet = Self {
            symbols: vec![0u8; 5],
            codes: [None; 256],
        };

        for (&byte, &code) in UTF8_TO_DIGITAL_DNA.entries() {
            alphabet.symbols[code as usize] = byte.to_ascii_uppercase();
            alphabet.codes[byte as usize] = Some(code);
        }

        alphabet
    }

    fn push_symbol(&mut self, byte: u8) -> Result<(), DuplicateSymbolError> {
        let upper = byte.to_ascii_uppercase();

        if self.codes[upper as usize].is_some() {
            return Err(DuplicateSymbolError {
                symbol: char::from(upper),
            });
        }

        let code = self.symbols.len() as u8;
        self.symbols.push(upper);
        self.codes[upper as usize] = Some(code);
        self.codes[upper.to_ascii_lowercase() as usize] = Some(code);

        Ok(())
    }

    /// The number of symbols, gap included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn gap_code(&self) -> u8 {
        (self.symbols.len() - 1) as u8
    }

    pub fn code(&self, byte: u8) -> Result<u8, UnknownSymbolError> {
        self.codes[byte as usize].ok_or(UnknownSymbolError { byte })
    }

    pub fn symbol(&self, code: u8) -> Result<u8, UnknownCodeError> {
        match self.symbols.get(code as usize) {
            Some(&byte) => Ok(byte),
            None => Err(UnknownCodeError { code }),
        }
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>, UnknownSymbolError> {
        text.bytes().map(|byte| self.code(byte)).collect()
    }

    pub fn decode(&self, codes: &[u8]) -> Result<String, UnknownCodeError> {
        let bytes: Vec<u8> = codes
            .iter()
            .map(|&code| self.symbol(code))
            .collect::<Result<_, _>>()?;

        // symbols are always valid single-byte UTF8
        Ok(String::from_utf8(bytes).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_dna_round_trip() -> anyhow::Result<()> {
        let alphabet = Alphabet::dna();

        let codes = alphabet.encode("ACGT-A")?;
        check!(codes == vec![0, 1, 2, 3, 4, 0]);
        check!(alphabet.decode(&codes)? == "ACGT-A");

        // lower case input decodes to upper case
        let codes = alphabet.encode("acgt")?;
        check!(alphabet.decode(&codes)? == "ACGT");

        Ok(())
    }

    #[test]
    fn test_gap_is_last() {
        let alphabet = Alphabet::dna();
        check!(alphabet.len() == 5);
        check!(alphabet.gap_code() == 4);
        check!(alphabet.symbol(4).unwrap() == UTF8_DASH);

        let alphabet = Alphabet::new(b"AC").unwrap();
        check!(alphabet.len() == 3);
        check!(alphabet.gap_code() == 2);
        check!(alphabet.symbol(2).unwrap() == UTF8_DASH);
    }

    #[test]
    fn test_unknown_symbol() {
        let alphabet = Alphabet::dna();
        check!(alphabet.encode("ACGX").is_err());
        check!(alphabet.decode(&[0, 5]).is_err());
    }

    #[test]
    fn test_duplicate_symbol() {
        check!(Alphabet::new(b"ACGA").is_err());
        // the gap symbol may not be declared explicitly
        check!(Alphabet::new(b"ACGT-").is_err());
        // case-insensitive duplicates
        check!(Alphabet::new(b"ACGc").is_err());
    }
}
