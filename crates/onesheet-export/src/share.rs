//! Share-link stub.
//!
//! Produces an opaque reference appended to a base URL. Nothing is
//! persisted: the resulting link is not resolvable. A real implementation
//! must store the document keyed by this reference for the link to mean
//! anything; this module only fixes the contract.

use uuid::Uuid;

pub const DEFAULT_SHARE_BASE: &str = "https://onesheet.app/share";

/// An opaque share reference. Unpersisted — see the module docs.
pub fn generate_share_reference() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn share_url(base: &str, reference: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_are_opaque_and_distinct() {
        let a = generate_share_reference();
        let b = generate_share_reference();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn url_join_handles_trailing_slash() {
        assert_eq!(share_url("https://x.test/share/", "abc"), "https://x.test/share/abc");
        assert_eq!(share_url("https://x.test/share", "abc"), "https://x.test/share/abc");
    }
}
