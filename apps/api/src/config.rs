use crate::analysis::scoring::ScoreWeights;
use crate::errors::AppError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub google_ai_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub analysis: AnalysisConfig,
    pub ocr_language: String,
    pub tesseract_bin: String,
    pub port: u16,
    pub rust_log: String,
}

/// Tunables for the resume analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Used when the model omits a `Compatibility Score: N` line.
    pub ats_fallback_score: u32,
    /// How many rows of the skills-demand table to join missing skills against.
    pub skills_demand_limit: i64,
    /// How many job-role rows to join market-fit roles against.
    pub job_roles_limit: i64,
    pub weights: ScoreWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ats_fallback_score: 70,
            skills_demand_limit: 10,
            job_roles_limit: 10,
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = AnalysisConfig::default();

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: env_or("OPENAI_MODEL", "gpt-4"),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            google_ai_key: require_env("GOOGLE_AI_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", "gemini-pro"),
            gemini_base_url: env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            analysis: AnalysisConfig {
                ats_fallback_score: parse_env("ATS_FALLBACK_SCORE", defaults.ats_fallback_score)?,
                skills_demand_limit: parse_env("SKILLS_DEMAND_LIMIT", defaults.skills_demand_limit)?,
                job_roles_limit: parse_env("JOB_ROLES_LIMIT", defaults.job_roles_limit)?,
                weights: defaults.weights,
            },
            ocr_language: env_or("OCR_LANGUAGE", "eng"),
            tesseract_bin: env_or("TESSERACT_BIN", "tesseract"),
            port: parse_env("PORT", 8080u16)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String, AppError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            AppError::Configuration(format!("Required environment variable '{key}' is not set"))
        })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::Configuration(format!("{key} must be a valid number, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults_match_documented_policy() {
        let defaults = AnalysisConfig::default();
        assert_eq!(defaults.ats_fallback_score, 70);
        assert_eq!(defaults.skills_demand_limit, 10);
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("CAREERSCOPE_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_require_env_names_missing_variable() {
        match require_env("CAREERSCOPE_TEST_MISSING_KEY") {
            Err(AppError::Configuration(msg)) => {
                assert!(msg.contains("CAREERSCOPE_TEST_MISSING_KEY"))
            }
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_number_is_configuration_error() {
        match parse_value::<u16>("PORT", "eighty") {
            Err(AppError::Configuration(msg)) => {
                assert!(msg.contains("PORT"));
                assert!(msg.contains("eighty"));
            }
            other => panic!("expected Configuration error, got {other:?}"),
        }
        assert_eq!(parse_value::<u16>("PORT", " 9090 ").unwrap(), 9090);
    }
}
