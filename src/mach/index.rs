use crate::lang::LineNumber;

/// ## Line index
///
/// Maps line numbers to the byte offset of their number token. Lines are
/// added as they execute, so the index only knows lines visited so far.
/// Lookups scan linearly; programs are small.

#[derive(Debug, Default, Clone)]
pub struct LineIndex {
    entries: Vec<(LineNumber, usize)>,
}

impl LineIndex {
    pub fn new() -> LineIndex {
        LineIndex::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first position recorded for a line stays authoritative.
    /// Returns whether the entry was added.
    pub fn record(&mut self, line: LineNumber, position: usize) -> bool {
        if self.lookup(line).is_some() {
            return false;
        }
        self.entries.push((line, position));
        true
    }

    pub fn lookup(&self, line: LineNumber) -> Option<usize> {
        self.entries
            .iter()
            .find(|(number, _)| *number == line)
            .map(|(_, position)| *position)
    }
}
