use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<JobSalary>,
    pub url: String,
    pub posted_date: String,
}

impl JobPosting {
    /// Identity used for cross-source dedup.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}-{}", self.company, self.title, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSalary {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

/// What every source is asked for.
#[derive(Debug, Clone)]
pub struct JobQuery {
    pub keywords: Vec<String>,
    pub location: Option<String>,
    pub limit: usize,
}
