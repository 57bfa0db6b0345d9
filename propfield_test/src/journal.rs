use propfield::properties;

/// Collects entries written through a write-only property.
///
/// ```compile_fail
/// let journal = propfield_test::Journal::new();
/// let _ = journal.entry.get();
/// ```
#[properties]
pub struct Journal {
    entries: Vec<String>,
    #[property(set = pub record)]
    pub entry: String,
}

impl Journal {
    pub fn new() -> Self {
        Journal {
            entries: Vec::new(),
            entry: JournalEntryProperty::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
