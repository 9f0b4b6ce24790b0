//! Site-wide constants and link builders.

/// Number the WhatsApp deep link points at, in international format.
pub const WHATSAPP_NUMBER: &str = "5215592256099";

/// Pre-filled greeting, already percent-encoded for the wa.me query string.
const WHATSAPP_GREETING: &str = "Hola%2C%20hola";

/// Deep link that opens a WhatsApp chat with HeyLuni.
pub fn whatsapp_link() -> String {
    format!("https://wa.me/{}?text={}", WHATSAPP_NUMBER, WHATSAPP_GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_targets_wa_me() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/"));
        assert!(link.contains(WHATSAPP_NUMBER));
        assert!(link.contains("?text="));
    }
}
