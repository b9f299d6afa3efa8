use crate::error::{BurrowsError, Result};

/// Move To Front index. Holds every byte value exactly once, most recently used first. Starts in
/// ascending order for every encode or decode.
#[derive(Debug, Clone)]
pub struct MtfIndex {
    index: [u8; 256],
}

impl MtfIndex {
    pub fn new() -> Self {
        let mut index = [0_u8; 256];
        index.iter_mut().enumerate().for_each(|(i, s)| *s = i as u8);
        Self { index }
    }

    /// Returns the current position of byte and moves it to the front.
    pub fn encode(&mut self, byte: u8) -> u8 {
        let idx = self
            .index
            .iter()
            .position(|&c| c == byte)
            .expect("every byte value is in the Move To Front index");
        self.promote(idx);
        idx as u8
    }

    /// Returns the byte at position idx and moves it to the front.
    pub fn decode(&mut self, idx: usize) -> Result<u8> {
        let byte = *self.index.get(idx).ok_or(BurrowsError::InvalidIndex {
            index: idx,
            limit: self.index.len(),
        })?;
        self.promote(idx);
        Ok(byte)
    }

    /// Shift each symbol in front of idx back one place, then put the symbol at idx in front.
    fn promote(&mut self, idx: usize) {
        if idx > 0 {
            let temp_sym = self.index[idx];
            self.index.copy_within(..idx, 1);
            self.index[0] = temp_sym;
        }
    }

    /// Current ordering, most recent first.
    pub fn symbols(&self) -> &[u8; 256] {
        &self.index
    }
}

impl Default for MtfIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using Move To Front transform.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut index = MtfIndex::new();
    data.iter().map(|&byte| index.encode(byte)).collect()
}

/// Decode Move To Front data.
pub fn mtf_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut index = MtfIndex::new();
    data.iter().map(|&idx| index.decode(idx as usize)).collect()
}
