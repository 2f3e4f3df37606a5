//! Outbound deep links: `mailto:`, `wa.me` and `tel:`.
//!
//! These are pure string builders. Values are percent-encoded with the same
//! character set as `encodeURIComponent`; nothing else is sanitised.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Percent-encode a single URI component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A composed email: subject line plus plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:` link carrying this subject and body.
    pub fn mailto(&self, address: &str) -> String {
        mailto(address, &self.subject, Some(&self.body))
    }
}

/// `mailto:<addr>?subject=<enc>[&body=<enc>]`
pub fn mailto(address: &str, subject: &str, body: Option<&str>) -> String {
    let mut link = format!("mailto:{}?subject={}", address, encode_component(subject));
    if let Some(body) = body {
        link.push_str("&body=");
        link.push_str(&encode_component(body));
    }
    link
}

/// `https://wa.me/<digits>?text=<enc>`
///
/// Anything that is not an ASCII digit is dropped from `number`, so both
/// `919110687983` and `+91 91106 87983` give the same link.
pub fn whatsapp(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("{}{}?text={}", WHATSAPP_BASE, digits, encode_component(text))
}

/// `tel:<number>`
pub fn tel(number: &str) -> String {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's (ok)!*~._-"), "it's%20(ok)!*~._-");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("₹"), "%E2%82%B9");
    }

    #[test]
    fn test_mailto_with_and_without_body() {
        assert_eq!(
            mailto("team@space.dev", "Hello there", None),
            "mailto:team@space.dev?subject=Hello%20there"
        );
        assert_eq!(
            mailto("team@space.dev", "Hi", Some("Body: 1+1")),
            "mailto:team@space.dev?subject=Hi&body=Body%3A%201%2B1"
        );
    }

    #[test]
    fn test_outbound_message_mailto() {
        let msg = OutboundMessage::new("Quote", "Line one\nLine two");
        assert_eq!(
            msg.mailto("a@b.co"),
            "mailto:a@b.co?subject=Quote&body=Line%20one%0ALine%20two"
        );
    }

    #[test]
    fn test_whatsapp_strips_non_digits() {
        assert_eq!(
            whatsapp("+91 91106 87983", "Hi SPACE"),
            "https://wa.me/919110687983?text=Hi%20SPACE"
        );
    }

    #[test]
    fn test_tel_keeps_plus() {
        assert_eq!(tel("+91 9110687983"), "tel:+919110687983");
    }
}
