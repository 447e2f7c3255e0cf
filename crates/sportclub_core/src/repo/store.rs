//! In-memory ordered record store.

use crate::codec::{LineCodec, ParseFailure};

/// Ordered collection of one entity family.
///
/// Order is insertion order for added records and file order for loaded
/// ones; saves preserve it.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: LineCodec> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Keeps records matching `keep` and returns how many were dropped.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(keep);
        before - self.records.len()
    }

    /// Replaces content with every decodable line, in file order.
    ///
    /// Blank lines are ignored. Undecodable lines are skipped and returned.
    pub(crate) fn replace_from_lines(&mut self, lines: &[String]) -> Vec<ParseFailure> {
        self.records.clear();
        let mut skipped = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match T::decode_line(line) {
                Ok(record) => self.records.push(record),
                Err(error) => skipped.push(ParseFailure {
                    entity: T::KIND,
                    line_number: index + 1,
                    error,
                }),
            }
        }
        skipped
    }

    pub(crate) fn encode_lines(&self) -> Vec<String> {
        self.records.iter().map(T::encode_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStore;
    use crate::codec::DecodeError;
    use crate::model::member::Member;

    #[test]
    fn replace_from_lines_skips_blank_and_bad_lines() {
        let mut store = RecordStore::<Member>::new();
        let lines = vec![
            "11111111-2222-4333-8444-555555555555|Jane Doe|555|jane@club.io".to_string(),
            String::new(),
            "not-a-member".to_string(),
            "22222222-2222-4333-8444-555555555555|John Roe||".to_string(),
        ];

        let skipped = store.replace_from_lines(&lines);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].full_name, "John Roe");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].line_number, 3);
        assert_eq!(
            skipped[0].error,
            DecodeError::TooFewFields {
                expected: 4,
                found: 1
            }
        );
    }

    #[test]
    fn retain_reports_removed_count() {
        let mut store = RecordStore::<Member>::new();
        store.push(Member::new("A", "", ""));
        store.push(Member::new("B", "", ""));
        store.push(Member::new("A", "", ""));

        let removed = store.retain(|member| member.full_name != "A");
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
    }
}
