//! API-X session id signer.

use apisign_core::hash::{base64_encode, hex_sha256};
use log::debug;

/// RequestSigner derives the `app_session_id` of an API-X request.
///
/// The session id proves possession of the app key without sending it, and
/// changes with every timestamp and salt so the server can reject replays.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }

    /// Sign the request and return the session id.
    ///
    /// The result is 64 lowercase hex characters. `body` must be the exact
    /// bytes that will be sent, `date` the exact `Date` header value and
    /// `salt` the raw bytes behind the `salt` header.
    pub fn sign(
        &self,
        app_key: &str,
        body: Option<&[u8]>,
        date: &str,
        salt: Option<&[u8]>,
    ) -> String {
        let string_to_sign = string_to_sign(app_key, body, date, salt);
        debug!(
            "signing with date {date:?}, body {} bytes, salted: {}",
            body.map_or(0, <[u8]>::len),
            salt.is_some()
        );

        hex_sha256(string_to_sign.as_bytes())
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// Base64(Body) + AppKey + Date + Base64(Salt)
/// ```
///
/// An absent body or salt contributes an empty string. The order is fixed,
/// the server concatenates the same way.
pub fn string_to_sign(
    app_key: &str,
    body: Option<&[u8]>,
    date: &str,
    salt: Option<&[u8]>,
) -> String {
    let body = body.map(base64_encode).unwrap_or_default();
    let salt = salt.map(base64_encode).unwrap_or_default();

    let mut s = String::with_capacity(body.len() + app_key.len() + date.len() + salt.len());
    s.push_str(&body);
    s.push_str(app_key);
    s.push_str(date);
    s.push_str(&salt);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DATE: &str = "Sat, 12 Feb 2022 07:52:00 GMT";
    const BODY: &[u8] = br#"{"bodyParam1":"value1"}"#;
    const SALT: &[u8] = &[1, 2, 3];

    #[test]
    fn test_string_to_sign() {
        assert_eq!(
            string_to_sign("A", None, DATE, None),
            "ASat, 12 Feb 2022 07:52:00 GMT"
        );
        assert_eq!(
            string_to_sign("A", Some(BODY), DATE, Some(SALT)),
            "eyJib2R5UGFyYW0xIjoidmFsdWUxIn0=ASat, 12 Feb 2022 07:52:00 GMTAQID"
        );
    }

    #[test]
    fn test_sign() {
        let cases: Vec<(Option<&[u8]>, Option<&[u8]>, &str)> = vec![
            (
                None,
                None,
                "36f144b64f63a94594108ab11b65d950e15ddb0d75e5fee1c6ba43693cdd88c9",
            ),
            (
                Some(BODY),
                None,
                "36eeebddb2a6edeae2185260e299827c98330c50607dc684c71ecdaa8fb036d2",
            ),
            (
                Some(BODY),
                Some(SALT),
                "eb4b72425252cfa3b927fd145bd4dbe876a82fe231d4de1d2c016316ed14c6da",
            ),
        ];

        let signer = RequestSigner::new();
        for (body, salt, expected) in cases {
            let actual = signer.sign("A", body, DATE, salt);
            assert_eq!(actual.len(), 64);
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = RequestSigner::new();
        let a = signer.sign("A", Some(BODY), DATE, Some(&[9u8; 256][..]));
        let b = signer.sign("A", Some(BODY), DATE, Some(&[9u8; 256][..]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_depends_on_every_input() {
        let signer = RequestSigner::new();
        let base = signer.sign("A", Some(BODY), DATE, Some(&[1u8][..]));

        assert_ne!(base, signer.sign("B", Some(BODY), DATE, Some(&[1u8][..])));
        assert_ne!(base, signer.sign("A", None, DATE, Some(&[1u8][..])));
        assert_ne!(
            base,
            signer.sign("A", Some(BODY), "Sat, 12 Feb 2022 07:52:01 GMT", Some(&[1u8][..]))
        );
        assert_ne!(base, signer.sign("A", Some(BODY), DATE, Some(&[2u8][..])));
        assert_ne!(base, signer.sign("A", Some(BODY), DATE, None));
    }

    #[test]
    fn test_sign_empty_body_differs_from_null() {
        let signer = RequestSigner::new();
        let absent = signer.sign("A", None, DATE, None);
        assert_eq!(absent, signer.sign("A", Some(&b""[..]), DATE, None));
        assert_ne!(absent, signer.sign("A", Some(&b"null"[..]), DATE, None));
        assert_ne!(absent, signer.sign("A", Some(&b"{}"[..]), DATE, None));
    }
}
