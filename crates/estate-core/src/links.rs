//! Outbound Links
//!
//! `tel:` and WhatsApp deep links. Pure string builders; the browser's own
//! handler does the rest.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` escapes
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

pub fn dial_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `tel:` link, keeping an international `+` prefix
pub fn phone_url(phone: &str) -> String {
    let prefix = if phone.trim_start().starts_with('+') { "+" } else { "" };
    format!("tel:{}{}", prefix, dial_digits(phone))
}

pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", dial_digits(phone), encode_component(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_url() {
        assert_eq!(phone_url("+91 98765 43210"), "tel:+919876543210");
        assert_eq!(phone_url("0661-2400100"), "tel:06612400100");
    }

    #[test]
    fn test_whatsapp_url_matches_uri_component_encoding() {
        assert_eq!(
            whatsapp_url("+91 98765 43210", "Hi, I'm interested in Atlantis properties"),
            "https://wa.me/919876543210?text=Hi%2C%20I'm%20interested%20in%20Atlantis%20properties"
        );
    }

    #[test]
    fn test_encode_component_edge_cases() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("?&=/#+"), "%3F%26%3D%2F%23%2B");
        assert_eq!(encode_component("₹"), "%E2%82%B9");
        assert_eq!(encode_component(""), "");
    }
}
