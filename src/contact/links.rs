//! `tel:`, `sms:` and `mailto:` link builders.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves as-is
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component (spaces as `%20`, not `+`)
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// SMS link that pre-fills the message body on iOS and Android
pub fn build_sms_link(phone: &str, message: &str) -> String {
    format!("sms:{}?&body={}", phone, encode_component(message))
}

pub fn build_mailto(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        encode_component(subject),
        encode_component(body)
    )
}

/// Format a NANP number as `(503) 893-4795`; anything else is returned as-is
pub fn format_phone(e164: &str) -> String {
    let digits: String = e164.chars().filter(|c| c.is_ascii_digit()).collect();
    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return e164.to_string(),
    };
    format!("({}) {}-{}", &local[0..3], &local[3..6], &local[6..10])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("1+1=2"), "1%2B1%3D2");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("—"), "%E2%80%94");
        assert_eq!(encode_component("Hi! (it's ~*ok*)"), "Hi!%20(it's%20~*ok*)");
        assert_eq!(encode_component("a&b?c#d/e"), "a%26b%3Fc%23d%2Fe");
    }

    #[test]
    fn test_sms_link() {
        assert_eq!(
            build_sms_link("+15038934795", "Hi there"),
            "sms:+15038934795?&body=Hi%20there"
        );
    }

    #[test]
    fn test_mailto() {
        assert_eq!(
            build_mailto("team@example.com", "Quote", "Line one\nLine two"),
            "mailto:team@example.com?subject=Quote&body=Line%20one%0ALine%20two"
        );
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("+15038934795"), "(503) 893-4795");
        assert_eq!(format_phone("503-893-4795"), "(503) 893-4795");
        assert_eq!(format_phone("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(format_phone(""), "");
    }
}
