// A record for one aligned sequence: its Clustal label and the concatenation of its fragments
// across all blocks.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    // Number of alignment columns, gaps included.
    pub fn aligned_len(&self) -> usize {
        self.sequence.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_len_counts_gaps() {
        let rec = SeqRecord {
            header: String::from("seq one"),
            sequence: String::from("AT-ACT-"),
        };
        assert_eq!(7, rec.aligned_len());
    }
}
