//! Moltbook API key holder.
//!
//! The key is wrapped in [`SecretString`] and only exposed when building the
//! `Authorization` header. This type intentionally does not derive `Debug`;
//! the manual impl reports only whether a key is present.

use std::fmt;

use secrecy::SecretString;

use molt_types::error::SocialError;

/// The bearer credential owned by the agent coordinator.
#[derive(Default)]
pub struct Credential(Option<SecretString>);

impl Credential {
    /// A credential with no key set.
    pub fn none() -> Self {
        Self(None)
    }

    /// Wrap a key. Blank input yields an unset credential.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            Self(None)
        } else {
            Self(Some(SecretString::from(key.to_string())))
        }
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The key, or [`SocialError::MissingCredential`] when none is set.
    ///
    /// Clients call this before touching the network.
    pub fn require(&self) -> Result<&SecretString, SocialError> {
        self.0.as_ref().ok_or(SocialError::MissingCredential)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_set() { "set" } else { "unset" };
        write!(f, "Credential({state})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_unset_credential_fails_require() {
        let credential = Credential::none();
        assert!(!credential.is_set());
        assert!(matches!(
            credential.require(),
            Err(SocialError::MissingCredential)
        ));
    }

    #[test]
    fn test_blank_key_is_unset() {
        assert!(!Credential::new("   ").is_set());
    }

    #[test]
    fn test_key_is_trimmed_and_exposed() {
        let credential = Credential::new("  moltbook_abc123 \n");
        assert_eq!(credential.require().unwrap().expose_secret(), "moltbook_abc123");
    }

    #[test]
    fn test_debug_hides_key() {
        let rendered = format!("{:?}", Credential::new("moltbook_secret"));
        assert_eq!(rendered, "Credential(set)");
        assert!(!rendered.contains("moltbook_secret"));
    }
}
