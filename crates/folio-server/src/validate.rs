//! Contact submission checks, applied in a fixed order. The first failing
//! check decides the response.

use crate::error::{
    ContactError, MSG_INVALID_EMAIL, MSG_MESSAGE_TOO_LONG, MSG_MISSING_FIELDS, MSG_NAME_TOO_LONG,
};
use folio_core::ContactRequest;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_MESSAGE_CHARS: usize = 1000;

pub const SPAM_KEYWORDS: [&str; 10] = [
    "viagra",
    "casino",
    "lottery",
    "winner",
    "congratulations",
    "click here",
    "free money",
    "urgent",
    "act now",
    "limited time",
];

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Trims and strips angle brackets.
pub fn sanitize(input: &str) -> String {
    input.trim().chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

pub fn is_spam(message: &str) -> bool {
    let lowered = message.to_lowercase();
    SPAM_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Returns the sanitized submission when every check passes.
pub fn validate_submission(raw: &ContactRequest) -> Result<ContactRequest, ContactError> {
    if !raw.is_complete() {
        return Err(ContactError::Validation(MSG_MISSING_FIELDS));
    }
    let clean = ContactRequest {
        name: sanitize(&raw.name),
        email: sanitize(&raw.email),
        message: sanitize(&raw.message),
    };
    if !clean.is_complete() {
        return Err(ContactError::Validation(MSG_MISSING_FIELDS));
    }
    if !is_valid_email(&clean.email) {
        return Err(ContactError::Validation(MSG_INVALID_EMAIL));
    }
    if is_spam(&clean.message) {
        return Err(ContactError::Spam);
    }
    if clean.name.chars().count() > MAX_NAME_CHARS {
        return Err(ContactError::Validation(MSG_NAME_TOO_LONG));
    }
    if clean.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ContactError::Validation(MSG_MESSAGE_TOO_LONG));
    }
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn rejection(raw: ContactRequest) -> &'static str {
        validate_submission(&raw)
            .expect_err("submission should be rejected")
            .public_message()
    }

    #[test]
    fn sanitizes_accepted_submissions() {
        let clean = validate_submission(&request(
            "  <b>Ada</b> ",
            " ada@example.com ",
            "Hello <there>",
        ))
        .expect("valid submission");
        assert_eq!(clean.name, "bAda/b");
        assert_eq!(clean.email, "ada@example.com");
        assert_eq!(clean.message, "Hello there");
    }

    #[test]
    fn missing_fields_come_first() {
        assert_eq!(rejection(request("", "not-an-email", "viagra")), MSG_MISSING_FIELDS);
        assert_eq!(rejection(request("<>", "a@b.co", "hi")), MSG_MISSING_FIELDS);
    }

    #[test]
    fn email_shape_is_checked() {
        for email in ["not-an-email", "a@b", "a b@c.de", "@c.de", "a@@b.co"] {
            assert_eq!(rejection(request("Ada", email, "hi")), MSG_INVALID_EMAIL, "{email}");
        }
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn spam_keywords_match_any_case() {
        assert_eq!(
            rejection(request("Ada", "a@b.co", "Buy VIAGRA today")),
            crate::error::MSG_SPAM
        );
        assert!(is_spam("please CLICK HERE"));
        assert!(!is_spam("a casual hello"));
    }

    #[test]
    fn email_is_checked_before_spam() {
        assert_eq!(rejection(request("Ada", "nope", "casino")), MSG_INVALID_EMAIL);
    }

    #[test]
    fn length_limits_count_characters() {
        let long_name = "n".repeat(MAX_NAME_CHARS + 1);
        assert_eq!(rejection(request(&long_name, "a@b.co", "hi")), MSG_NAME_TOO_LONG);

        let exact = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_submission(&request("Ada", "a@b.co", &exact)).is_ok());

        let long_message = "m".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            rejection(request("Ada", "a@b.co", &long_message)),
            MSG_MESSAGE_TOO_LONG
        );
    }
}
