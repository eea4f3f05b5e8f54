use std::collections::HashMap;

// Raw attributes of one not-yet-terminated block. A duplicate key within
// the same block overwrites the earlier value.
#[derive(Debug, Default)]
pub struct Accumulator {
    attrs: HashMap<String, String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            attrs: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.attrs.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    // Hands the accumulated attributes out wholesale, leaving the
    // accumulator empty and ready for the next block.
    pub fn take(&mut self) -> HashMap<String, String> {
        std::mem::take(&mut self.attrs)
    }
}
