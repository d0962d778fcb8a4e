use std::path::Path;

use anyhow::Context;
use pfmarket_common::handoff::HandoffConfig;

/// Load the handoff configuration, or the built-in defaults when no path is given.
///
/// Fields missing from the file keep their default values.
pub fn load_handoff_config(path: Option<&Path>) -> anyhow::Result<HandoffConfig> {
    let Some(path) = path else {
        return Ok(HandoffConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: HandoffConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded handoff config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_path() {
        assert_eq!(load_handoff_config(None).unwrap(), HandoffConfig::default());
    }

    #[test]
    fn file_overrides_some_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"payee_name":"Studio Test","whatsapp_phone":"919000000000"}}"#).unwrap();

        let config = load_handoff_config(Some(file.path())).unwrap();
        assert_eq!(config.payee_name, "Studio Test");
        assert_eq!(config.whatsapp_phone, "919000000000");
        assert_eq!(config.upi_vpa, HandoffConfig::default().upi_vpa);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_handoff_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_handoff_config(Some(Path::new("/nonexistent/pfmarket.json"))).unwrap_err();
        assert!(err.to_string().starts_with("reading config"));
    }
}
