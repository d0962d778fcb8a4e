//! Decoding helpers for the `wa.me` handoff URL.

/// The parts of a verification message a journey cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHandoff {
    pub phone: String,
    pub message: String,
}

impl DecodedHandoff {
    /// Value of a `Label: value` line, if present.
    pub fn field(&self, label: &str) -> Option<&str> {
        let prefix = format!("{label}: ");
        self.message
            .lines()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
    }
}

pub fn decode(url: &str) -> Option<DecodedHandoff> {
    let rest = url.strip_prefix("https://wa.me/")?;
    let (phone, query) = rest.split_once('?')?;
    let text = query.strip_prefix("text=")?;
    let message = urlencoding::decode(text).ok()?.into_owned();
    Some(DecodedHandoff {
        phone: phone.to_string(),
        message,
    })
}
