use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub records: RecordsConfig,
    pub summary: SummaryConfig,
    pub sales: SalesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecordsConfig {
    pub page_size: usize,
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Rows requested for the per-store table
    pub table_page_size: usize,
    /// Rows requested for the aggregated report, large enough to cover every store
    pub chart_page_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SalesConfig {
    /// Manager recorded on every sale created from this UI
    pub office_manager_id: i64,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://api.gajkesaristeels.in"

[records]
page_size = 15
debounce_ms = 500

[summary]
table_page_size = 100
chart_page_size = 1000

[sales]
office_manager_id = 86
"#;

/// Parse a configuration document, applying the build-time API base override
pub fn load_config(source: &str, base_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(source)?;
    if let Some(base) = base_override.filter(|b| !b.trim().is_empty()) {
        config.api.base_url = base.trim().to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match load_config(DEFAULT_CONFIG, option_env!("SALES_API_BASE")) {
        Ok(config) => config,
        Err(e) => panic!("embedded configuration is invalid: {}", e),
    }
});

/// Process-wide configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "https://api.gajkesaristeels.in");
        assert_eq!(config.records.page_size, 15);
        assert_eq!(config.records.debounce_ms, 500);
        assert_eq!(config.summary.table_page_size, 100);
        assert_eq!(config.summary.chart_page_size, 1000);
        assert_eq!(config.sales.office_manager_id, 86);
    }

    #[test]
    fn test_base_override() {
        let config = load_config(DEFAULT_CONFIG, Some("http://localhost:8080/")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");

        let config = load_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "https://api.gajkesaristeels.in");
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(load_config("[api]\nbase_url = \"x\"\n", None).is_err());
    }
}
