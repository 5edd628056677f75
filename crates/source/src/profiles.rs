//! A [`ProfileProvider`] backed by a JSON file keyed by vendor name.

use crate::error::SourceError;
use factsheet_traits::{ProfileError, ProfileLookup, ProfileProvider};
use factsheet_types::{VendorId, VendorProfile};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Profiles read from a store file.
///
/// The file must be a JSON object. An entry that does not match the profile
/// shape does not fail the load; looking that vendor up reports
/// [`ProfileError::Malformed`] instead.
#[derive(Debug, Default)]
pub struct JsonProfileProvider {
    entries: HashMap<VendorId, Result<VendorProfile, String>>,
}

impl JsonProfileProvider {
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
        let provider = Self::from_json_str(&text).map_err(|source| SourceError::ProfileStore {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Loaded {} vendor profiles from {}",
            provider.entries.len(),
            path.display()
        );
        Ok(provider)
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Value> = serde_json::from_str(text)?;
        let entries = raw
            .into_iter()
            .map(|(vendor, value)| {
                let profile = serde_json::from_value::<VendorProfile>(value).map_err(|e| e.to_string());
                if let Err(message) = &profile {
                    log::warn!("Profile for '{vendor}' is malformed: {message}");
                }
                (VendorId::from(vendor), profile)
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProfileProvider for JsonProfileProvider {
    fn lookup(&self, vendor: &VendorId) -> Result<ProfileLookup, ProfileError> {
        match self.entries.get(vendor) {
            Some(Ok(profile)) => Ok(ProfileLookup::Found(profile.clone())),
            Some(Err(message)) => Err(ProfileError::Malformed {
                vendor: vendor.to_string(),
                message: message.clone(),
            }),
            None => Ok(ProfileLookup::NotFound),
        }
    }

    fn name(&self) -> &'static str {
        "JsonProfileProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STORE: &str = r#"{
        "Acme": {
            "KeyAccountManagers": ["Acme Manager 1, +49 123 456 7890"],
            "Financials": { "Revenue": "10 USD" },
            "Strategy": "- Negotiate competitive pricing."
        },
        "Broken": { "KeyStakeholders": "should be a list" }
    }"#;

    #[test]
    fn test_lookup_outcomes() {
        let provider = JsonProfileProvider::from_json_str(STORE).unwrap();
        assert_eq!(provider.len(), 2);

        let acme = provider.lookup(&VendorId::new("Acme")).unwrap().into_option().unwrap();
        assert_eq!(acme.financials.revenue, "10 USD");
        assert!(acme.financials.market_cap.is_empty());

        assert_eq!(
            provider.lookup(&VendorId::new("Globex")).unwrap(),
            ProfileLookup::NotFound
        );
        assert!(matches!(
            provider.lookup(&VendorId::new("Broken")),
            Err(ProfileError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STORE.as_bytes()).unwrap();
        let provider = JsonProfileProvider::load(file.path()).unwrap();
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_non_object_store_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();
        assert!(matches!(
            JsonProfileProvider::load(file.path()),
            Err(SourceError::ProfileStore { .. })
        ));
    }
}
