#![deny(unsafe_code)]

use std::path::PathBuf;

use sha2::Digest;

use commune_model::CommuneRecord;

/// An immutable, ordered snapshot of the commune dataset.
///
/// Record order is file order; search results and rank tie-breaks depend
/// on it. Reloading the same bytes yields an element-wise identical
/// snapshot with an equal fingerprint.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Dataset {
    pub source: PathBuf,
    /// Lowercase-hex SHA-256 of the raw file bytes.
    pub fingerprint: String,
    pub records: Vec<CommuneRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fingerprint(b"CODGEO,P22_POP\n01001,450\n");
        let b = fingerprint(b"CODGEO,P22_POP\n01001,450\n");
        let c = fingerprint(b"CODGEO,P22_POP\n01001,451\n");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
