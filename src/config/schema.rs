//! Typed schema for `cdktf.json`.

use serde::{Deserialize, Serialize};

/// Project configuration, as declared in `cdktf.json`.
///
/// Field names follow the file's camelCase convention. Unknown fields are
/// ignored so newer project files keep loading. Only [`language`] is
/// consumed by the environment check.
///
/// [`language`]: ProjectConfig::language
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Target output language for code generation (e.g. "typescript", "go").
    pub language: String,

    /// Command that synthesizes the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,

    /// Synthesis output directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Directory generated provider bindings are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_maker_output: Option<String>,

    /// Stable project identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Whether crash reports may be sent upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_crash_reports: Option<bool>,

    /// Provider constraints to generate bindings for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terraform_providers: Vec<String>,

    /// Module constraints to generate bindings for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terraform_modules: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config: ProjectConfig = serde_json::from_str(r#"{ "language": "go" }"#).unwrap();
        assert_eq!(config.language, "go");
        assert!(config.app.is_none());
        assert!(config.terraform_providers.is_empty());
    }

    #[test]
    fn parses_camel_case_fields() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{
                "language": "typescript",
                "app": "npx ts-node main.ts",
                "codeMakerOutput": ".gen",
                "projectId": "abc123",
                "sendCrashReports": false,
                "terraformProviders": ["aws@~> 4.0"],
                "terraformModules": []
            }"#,
        )
        .unwrap();

        assert_eq!(config.language, "typescript");
        assert_eq!(config.app.as_deref(), Some("npx ts-node main.ts"));
        assert_eq!(config.code_maker_output.as_deref(), Some(".gen"));
        assert_eq!(config.project_id.as_deref(), Some("abc123"));
        assert_eq!(config.send_crash_reports, Some(false));
        assert_eq!(config.terraform_providers, vec!["aws@~> 4.0"]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{ "language": "python", "context": { "key": "value" } }"#)
                .unwrap();
        assert_eq!(config.language, "python");
    }

    #[test]
    fn missing_language_is_an_error() {
        let result = serde_json::from_str::<ProjectConfig>(r#"{ "app": "node main.js" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{ "language": "csharp", "codeMakerOutput": "Generated" }"#)
                .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("codeMakerOutput"));
        assert!(!json.contains("code_maker_output"));
    }
}
