use crate::dataset::Dataset;
use crate::error::SourceError;
use factsheet_types::VendorId;
use std::collections::HashSet;

/// The distinct vendors appearing in any input dataset.
///
/// Iteration order of the underlying set is unspecified; use [`sorted`]
/// whenever order matters.
///
/// [`sorted`]: VendorRoster::sorted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorRoster {
    vendors: HashSet<VendorId>,
}

impl VendorRoster {
    /// Unions the vendor column of every `(dataset, column)` pair.
    ///
    /// Cells that are blank after trimming are not vendors. Non-blank cells
    /// are kept verbatim.
    pub fn build(sources: &[(&Dataset, &str)]) -> Result<Self, SourceError> {
        let mut roster = Self::default();
        for (dataset, column) in sources {
            let before = roster.len();
            for cell in dataset.column(column)? {
                if !cell.trim().is_empty() {
                    roster.vendors.insert(VendorId::new(cell));
                }
            }
            log::debug!(
                "Dataset '{}' added {} new vendors to the roster",
                dataset.name(),
                roster.len() - before
            );
        }
        Ok(roster)
    }

    pub fn insert(&mut self, vendor: VendorId) -> bool {
        self.vendors.insert(vendor)
    }

    pub fn contains(&self, vendor: &str) -> bool {
        self.vendors.contains(vendor)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VendorId> {
        self.vendors.iter()
    }

    /// Vendors ordered by name.
    pub fn sorted(&self) -> Vec<VendorId> {
        let mut vendors: Vec<VendorId> = self.vendors.iter().cloned().collect();
        vendors.sort();
        vendors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(name: &str, column: &str, cells: &[&str]) -> Dataset {
        Dataset::new(
            name,
            vec![column.to_string()],
            cells.iter().map(|c| vec![c.to_string()]).collect(),
        )
    }

    #[test]
    fn test_union_of_all_sources() {
        let a = ds("a", "Vendor Name", &["Acme", "Globex"]);
        let b = ds("b", "Supplier", &["Acme", "Initech"]);
        let c = ds("c", "Supplier", &[]);
        let roster =
            VendorRoster::build(&[(&a, "Vendor Name"), (&b, "Supplier"), (&c, "Supplier")]).unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.len() >= a.len().max(b.len()).max(c.len()));
        for v in ["Acme", "Globex", "Initech"] {
            assert!(roster.contains(v));
        }
        let names: Vec<_> = roster.sorted().iter().map(|v| v.as_str().to_string()).collect();
        assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
    }

    #[test]
    fn test_matching_is_exact() {
        let a = ds("a", "v", &["Acme", "ACME", "Acme "]);
        let roster = VendorRoster::build(&[(&a, "v")]).unwrap();
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_blank_cells_ignored() {
        let a = ds("a", "v", &["", "   ", "Acme"]);
        let roster = VendorRoster::build(&[(&a, "v")]).unwrap();
        assert_eq!(roster.sorted(), vec![VendorId::new("Acme")]);
    }

    #[test]
    fn test_missing_vendor_column() {
        let a = ds("a", "v", &["Acme"]);
        assert!(matches!(
            VendorRoster::build(&[(&a, "Vendor Name")]),
            Err(SourceError::MissingColumn { .. })
        ));
    }
}
