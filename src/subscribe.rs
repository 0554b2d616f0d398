use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

// Postgres unique-violation code, as surfaced by the store's REST layer.
const UNIQUE_VIOLATION: &str = "23505";

/// Result of one subscription attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Reason),
}

/// Why an attempt was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Missing,
    Malformed,
    Duplicate,
    Unknown,
}

#[derive(Serialize)]
struct NewSubscriber<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct StoreError {
    code: Option<String>,
}

/// Validate locally, then insert the address into the subscriber collection.
/// Nothing goes over the wire when validation fails, and a single attempt is
/// made either way: failures land back on the caller as a `Rejected` outcome,
/// never as a retry.
pub async fn submit(email: &str) -> Outcome {
    if let Some(reason) = validate(email) {
        return Outcome::Rejected(reason);
    }
    let request = Request::post(&format!("{}/rest/v1/subscribers", config::get_store_url()))
        .header("apikey", config::get_store_anon_key())
        .header(
            "Authorization",
            &format!("Bearer {}", config::get_store_anon_key()),
        )
        .header("Prefer", "return=minimal")
        .json(&NewSubscriber { email })
        .unwrap();
    match request.send().await {
        Ok(response) => {
            if response.ok() {
                return Outcome::Accepted;
            }
            let status = response.status();
            let code = response
                .json::<StoreError>()
                .await
                .ok()
                .and_then(|body| body.code);
            log!("subscriber insert rejected with status:", status);
            Outcome::Rejected(classify_failure(status, code.as_deref()))
        }
        Err(e) => {
            log!("subscriber insert failed:", e.to_string());
            Outcome::Rejected(Reason::Unknown)
        }
    }
}

/// Local checks; `None` means the address is worth sending to the store.
fn validate(email: &str) -> Option<Reason> {
    if email.is_empty() {
        return Some(Reason::Missing);
    }
    if !is_valid_email(email) {
        return Some(Reason::Malformed);
    }
    None
}

/// Shape check only: something@something.something, with no whitespace and no
/// second '@'. The store remains the authority on what it will keep.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with at least one character on each side.
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

fn classify_failure(status: u16, code: Option<&str>) -> Reason {
    if code == Some(UNIQUE_VIOLATION) || status == 409 {
        Reason::Duplicate
    } else {
        Reason::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_missing() {
        assert_eq!(validate(""), Some(Reason::Missing));
    }

    #[test]
    fn word_without_at_sign_is_malformed() {
        assert_eq!(validate("not-an-email"), Some(Reason::Malformed));
    }

    #[test]
    fn plain_address_passes() {
        assert_eq!(validate("a@b.com"), None);
    }

    #[test]
    fn dotted_subdomains_pass() {
        assert_eq!(validate("first.last@mail.example.co.uk"), None);
    }

    #[test]
    fn rejects_whitespace_missing_parts_and_extra_at_signs() {
        let bad = [
            "a b@c.com",
            "a@b c.com",
            "a@b@c.com",
            "@b.com",
            "a@",
            "a@b",
            "a@.com",
            "a@com.",
        ];
        for email in bad {
            assert_eq!(validate(email), Some(Reason::Malformed), "{email}");
        }
    }

    #[test]
    fn reads_the_code_out_of_a_store_error_body() {
        let body: StoreError = serde_json::from_str(
            r#"{"code":"23505","details":"Key (email)=(a@b.com) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"subscribers_email_key\""}"#,
        )
        .unwrap();
        assert_eq!(body.code.as_deref(), Some("23505"));

        let bare: StoreError = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.code, None);
    }

    #[test]
    fn unique_violation_maps_to_duplicate() {
        assert_eq!(classify_failure(409, Some("23505")), Reason::Duplicate);
        // Conflict without a readable body is still a duplicate.
        assert_eq!(classify_failure(409, None), Reason::Duplicate);
    }

    #[test]
    fn other_store_failures_map_to_unknown() {
        assert_eq!(classify_failure(500, None), Reason::Unknown);
        assert_eq!(classify_failure(401, Some("42501")), Reason::Unknown);
        assert_eq!(classify_failure(400, Some("22P02")), Reason::Unknown);
    }
}
