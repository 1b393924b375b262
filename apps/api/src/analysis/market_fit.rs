//! Market fit: best matching roles (joined against `job_roles`), industries, locations.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::models::{MarketFit, MarketRole, RoleRequirements, SalaryRange};
use crate::analysis::prompts::MARKET_PROMPT_TEMPLATE;
use crate::analysis::sections::{extract_list_section, strip_list_marker};
use crate::errors::AppError;
use crate::llm_client::prompts::SECTIONED_TEXT_SYSTEM;
use crate::llm_client::{ChatProvider, CompletionRequest};
use crate::models::reference::JobRoleRow;
use crate::reference::ReferenceStore;

pub async fn analyze_market_fit(
    llm: &dyn ChatProvider,
    references: &dyn ReferenceStore,
    resume_text: &str,
    roles_limit: i64,
) -> Result<MarketFit, AppError> {
    let prompt = MARKET_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let request = CompletionRequest::new(prompt, 1000).with_system(SECTIONED_TEXT_SYSTEM);

    let (job_roles, analysis) = tokio::try_join!(references.job_roles(roles_limit), async {
        llm.complete(&request)
            .await
            .map_err(|e| AppError::Llm(format!("Market fit analysis failed: {e}")))
    })?;

    Ok(parse_market_fit(&analysis, &job_roles, resume_text))
}

pub fn parse_market_fit(analysis: &str, job_roles: &[JobRoleRow], resume_text: &str) -> MarketFit {
    let resume_lower = resume_text.to_lowercase();
    let roles = extract_list_section(analysis, "Roles")
        .iter()
        .map(|line| {
            let (title, match_score) = parse_role_line(line);
            build_role(title, match_score, job_roles, &resume_lower)
        })
        .collect();

    MarketFit {
        roles,
        industries: extract_list_section(analysis, "Industries"),
        locations: extract_list_section(analysis, "Locations"),
    }
}

fn role_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<title>.+?)\s*[-–:(]\s*(?P<pct>\d{1,3})\s*%?\)?\s*$")
            .expect("role line regex is valid")
    })
}

/// `"- Backend Engineer - 85%"` → (`"Backend Engineer"`, 85). Lines without a
/// percentage keep the whole line as the title with a match of 0.
pub fn parse_role_line(line: &str) -> (String, u32) {
    let line = strip_list_marker(line);
    match role_line_regex().captures(line) {
        Some(caps) => {
            let title = caps["title"].trim().to_string();
            let pct = caps["pct"].parse::<u32>().unwrap_or(0).min(100);
            (title, pct)
        }
        None => (line.to_string(), 0),
    }
}

fn build_role(
    title: String,
    match_score: u32,
    job_roles: &[JobRoleRow],
    resume_lower: &str,
) -> MarketRole {
    let title_lower = title.to_lowercase();
    let Some(row) = job_roles
        .iter()
        .find(|r| r.title.to_lowercase() == title_lower)
    else {
        return MarketRole {
            title,
            match_score,
            salary: SalaryRange::default(),
            requirements: RoleRequirements::default(),
        };
    };

    let (met, missing): (Vec<String>, Vec<String>) = row
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| resume_lower.contains(&skill.to_lowercase()));

    MarketRole {
        title,
        match_score,
        salary: SalaryRange {
            min: row.salary_min.unwrap_or_default(),
            max: row.salary_max.unwrap_or_default(),
            average: row.salary_avg.unwrap_or_default(),
        },
        requirements: RoleRequirements { met, missing },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_role() -> JobRoleRow {
        JobRoleRow {
            title: "Backend Engineer".to_string(),
            salary_min: Some(90_000.0),
            salary_max: Some(140_000.0),
            salary_avg: Some(115_000.0),
            required_skills: vec!["Rust".to_string(), "PostgreSQL".to_string(), "Kafka".to_string()],
        }
    }

    #[test]
    fn test_parse_role_line_variants() {
        assert_eq!(parse_role_line("- Backend Engineer - 85%"), ("Backend Engineer".to_string(), 85));
        assert_eq!(parse_role_line("1. Site Reliability Engineer (70%)"), ("Site Reliability Engineer".to_string(), 70));
        assert_eq!(parse_role_line("Full-Stack Developer: 60"), ("Full-Stack Developer".to_string(), 60));
        assert_eq!(parse_role_line("Platform Engineer"), ("Platform Engineer".to_string(), 0));
    }

    #[test]
    fn test_known_role_gets_salary_and_requirements() {
        let reply = "Roles:\n- backend engineer - 85%\n\nIndustries:\nFintech\n\nLocations:\nRemote";
        let fit = parse_market_fit(reply, &[backend_role()], "Built Rust services on PostgreSQL");

        assert_eq!(fit.roles.len(), 1);
        let role = &fit.roles[0];
        assert_eq!(role.match_score, 85);
        assert_eq!(role.salary.average, 115_000.0);
        assert_eq!(role.requirements.met, vec!["Rust", "PostgreSQL"]);
        assert_eq!(role.requirements.missing, vec!["Kafka"]);
        assert_eq!(fit.industries, vec!["Fintech"]);
        assert_eq!(fit.locations, vec!["Remote"]);
    }

    #[test]
    fn test_unknown_role_has_empty_salary() {
        let fit = parse_market_fit("Roles:\n- Data Engineer - 40%\n", &[backend_role()], "");
        assert_eq!(fit.roles[0].salary, SalaryRange::default());
        assert!(fit.roles[0].requirements.met.is_empty());
    }
}
