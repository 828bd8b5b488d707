pub trait DbConnectConfig: serde::de::DeserializeOwned {
    fn uri(&self) -> &str;
}

/// Configure database connection pool data
pub trait DbOptionsConfig {
    fn max_conn(&self) -> Option<u32> { None }
    fn min_conn(&self) -> Option<u32> { None }
    fn sql_logger(&self) -> bool { false }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PostgresDbConfig {
    pub uri: String,
    #[serde(default)]
    pub max_conn: Option<u32>,
    #[serde(default)]
    pub min_conn: Option<u32>,
    #[serde(default = "logger_default")]
    pub logger: bool,
}

impl PostgresDbConfig {
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            max_conn: None,
            min_conn: None,
            logger: logger_default(),
        }
    }
}

impl DbConnectConfig for PostgresDbConfig {
    fn uri(&self) -> &str { &self.uri }
}

impl DbOptionsConfig for PostgresDbConfig {
    fn max_conn(&self) -> Option<u32> { self.max_conn }

    fn min_conn(&self) -> Option<u32> { self.min_conn }

    fn sql_logger(&self) -> bool { self.logger }
}

fn logger_default() -> bool { false }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_uri_is_required() {
        let config: PostgresDbConfig =
            serde_json::from_str(r#"{"uri":"postgresql://localhost/pulse"}"#)
                .unwrap();

        assert_eq!(config.uri(), "postgresql://localhost/pulse");
        assert_eq!(config.max_conn(), None);
        assert!(!config.sql_logger());
    }
}
