pub mod profile;

pub use profile::{InMemoryProfileProvider, ProfileError, ProfileLookup, ProfileProvider};
