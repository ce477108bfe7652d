use serde::Deserialize;

/// Response of `GET /api/health`.
#[must_use]
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_health() {
        let body = r#"{"status": "healthy", "model_loaded": true, "version": "1.0.0"}"#;
        let health: Health = serde_json::from_str(body).unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.model_loaded);
        assert_eq!(health.version.as_deref(), Some("1.0.0"));
    }
}
