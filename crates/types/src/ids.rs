//! Newtype wrapper for the vendor identity key.
//!
//! Vendor names join spend, contract and project records. Matching is exact:
//! case and whitespace are significant and no fuzzy merging takes place.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The identity of a vendor across all input datasets.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(Arc<str>);

impl VendorId {
    /// Creates a new VendorId from a string
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the vendor name exactly as it appeared in the source data
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The vendor name made safe for use as a file name component.
    ///
    /// Only path separators are replaced; everything else is kept verbatim so
    /// that output names stay recognisable.
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect()
    }
}

impl From<String> for VendorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for VendorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for VendorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VendorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vendor_id_creation() {
        let id1 = VendorId::new("Acme");
        let id2 = VendorId::from("Acme");
        let id3 = VendorId::from(String::from("Acme"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "Acme");
    }

    #[test]
    fn test_matching_is_case_and_whitespace_sensitive() {
        let mut set = HashSet::new();
        set.insert(VendorId::new("Acme"));
        set.insert(VendorId::new("acme"));
        set.insert(VendorId::new("Acme "));
        assert_eq!(set.len(), 3);
        assert!(set.contains("Acme"));
    }

    #[test]
    fn test_file_stem_replaces_separators_only() {
        assert_eq!(VendorId::new("AT&T / EMEA").file_stem(), "AT&T _ EMEA");
        assert_eq!(VendorId::new("Red Hat").file_stem(), "Red Hat");
    }
}
