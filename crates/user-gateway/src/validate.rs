//! Local request validation.
//!
//! Invalid input is rejected here, before any backend call is issued. The
//! checks are syntactic only — whether an address is deliverable or a user
//! already exists is the backend's concern.

/// A request body field that failed local validation.
///
/// Converts into [`ApiError`](crate::ApiError) as a 400 response carrying the
/// message below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The email field was present but empty.
    #[error("email must not be empty")]
    MissingEmail,

    /// The email field does not look like an address.
    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),

    /// The name field was empty or all whitespace.
    #[error("name must not be empty")]
    MissingName,
}

/// Check that `value` is plausibly an email address.
///
/// Accepts `local@domain` where the local part is non-empty, the domain has
/// an interior dot, and the whole value contains no whitespace or second
/// `@`. This deliberately stops far short of RFC 5322 — the gateway only
/// filters obvious garbage.
///
/// # Errors
///
/// [`ValidationError::MissingEmail`] for an empty value,
/// [`ValidationError::MalformedEmail`] otherwise.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingEmail);
    }

    let malformed = || ValidationError::MalformedEmail(value.to_string());

    if value.chars().any(char::is_whitespace) {
        return Err(malformed());
    }

    let (local, domain) = value.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(malformed());
    }

    // Domain needs an interior dot: "b.com" yes, "b", ".com", "b." no.
    if !domain
        .split_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
    {
        return Err(malformed());
    }

    Ok(())
}

/// Check that a display name is non-blank.
///
/// # Errors
///
/// [`ValidationError::MissingName`] if `value` is empty or whitespace.
pub fn display_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_addresses_pass() {
        for value in ["a@b.com", "user.name+tag@example.co.uk", "x@y.z"] {
            assert_eq!(email(value), Ok(()), "{value} should validate");
        }
    }

    #[test]
    fn empty_email_is_missing() {
        assert_eq!(email(""), Err(ValidationError::MissingEmail));
    }

    #[test]
    fn garbage_addresses_fail() {
        for value in [
            "plain",
            "@x.com",
            "a@",
            "a@b",
            "a@.com",
            "a@b.",
            "a b@c.com",
            "a@b@c.com",
        ] {
            assert_eq!(
                email(value),
                Err(ValidationError::MalformedEmail(value.to_string())),
                "{value} should be rejected",
            );
        }
    }

    #[test]
    fn malformed_message_names_the_value() {
        let err = email("nope").unwrap_err();
        assert_eq!(err.to_string(), "'nope' is not a valid email address");
    }

    #[test]
    fn names_must_be_non_blank() {
        assert_eq!(display_name("Ann"), Ok(()));
        assert_eq!(display_name(""), Err(ValidationError::MissingName));
        assert_eq!(display_name("   "), Err(ValidationError::MissingName));
    }
}
