//! Request-scoped acting identity.

use crate::errors::ValidationError;
use crate::{Error, Result};

/// The owner every store and query call acts on behalf of.
///
/// Repository methods take this as a required argument and predicate every
/// statement on it, so there is no way to issue an unscoped query by
/// forgetting a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerContext {
    owner_id: String,
}

impl OwnerContext {
    pub fn new(owner_id: impl Into<String>) -> Result<Self> {
        let owner_id = owner_id.into();
        if owner_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ownerId".to_string(),
            )));
        }
        Ok(Self { owner_id })
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_owner_is_rejected() {
        assert!(OwnerContext::new("").is_err());
        assert!(OwnerContext::new("   ").is_err());
    }

    #[test]
    fn test_owner_id_is_kept_verbatim() {
        let ctx = OwnerContext::new("user-42").unwrap();
        assert_eq!(ctx.owner_id(), "user-42");
    }
}
