//! ProfileProvider trait for abstracting vendor profile lookup.
//!
//! Profile content (financials, stakeholders, market trends, ...) comes from
//! an external service or store. The assembler only sees this trait, so a
//! JSON file, a fixture map or a remote client can stand behind it.

use factsheet_types::{VendorId, VendorProfile};
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for profile lookups that could not be answered.
///
/// A vendor that is simply absent from the store is *not* an error; that is
/// [`ProfileLookup::NotFound`].
#[derive(Error, Debug, Clone)]
pub enum ProfileError {
    #[error("Profile source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed profile for '{vendor}': {message}")]
    Malformed { vendor: String, message: String },
}

/// The outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(VendorProfile),
    NotFound,
}

impl ProfileLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, ProfileLookup::Found(_))
    }

    pub fn into_option(self) -> Option<VendorProfile> {
        match self {
            ProfileLookup::Found(profile) => Some(profile),
            ProfileLookup::NotFound => None,
        }
    }
}

/// A blocking, keyed source of vendor profiles.
///
/// Called once per vendor. Implementations should not retry; callers degrade
/// a failed lookup to "data not available" content.
pub trait ProfileProvider: Send + Sync + Debug {
    /// Look up the profile for a vendor by its exact display name.
    fn lookup(&self, vendor: &VendorId) -> Result<ProfileLookup, ProfileError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A profile provider over a pre-populated map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProfileProvider {
    profiles: HashMap<VendorId, VendorProfile>,
}

impl InMemoryProfileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(profiles: HashMap<VendorId, VendorProfile>) -> Self {
        Self { profiles }
    }

    /// Add or replace the profile for a vendor.
    pub fn insert(&mut self, vendor: impl Into<VendorId>, profile: VendorProfile) {
        self.profiles.insert(vendor.into(), profile);
    }

    pub fn with(mut self, vendor: impl Into<VendorId>, profile: VendorProfile) -> Self {
        self.insert(vendor, profile);
        self
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileProvider for InMemoryProfileProvider {
    fn lookup(&self, vendor: &VendorId) -> Result<ProfileLookup, ProfileError> {
        Ok(match self.profiles.get(vendor) {
            Some(profile) => ProfileLookup::Found(profile.clone()),
            None => ProfileLookup::NotFound,
        })
    }

    fn name(&self) -> &'static str {
        "InMemoryProfileProvider"
    }
}
