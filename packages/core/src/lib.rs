//! irta-admin-setup-core - admin user guide content and branch selection
//!
//! This crate holds everything the CLI prints and the single decision it makes.
//! It performs no I/O.

pub mod guide;
pub mod profile;

pub use guide::{AFFIRMATIVE_TOKEN, Branch, Guide, GuideLine};
pub use profile::AdminProfile;

/// Get the version of this crate
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version_matches_manifest() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
    }
}
