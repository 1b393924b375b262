// Prompt for the two-provider career analysis.
// Replace `{text}` before sending. Both providers receive the identical prompt.

pub const RECONCILE_PROMPT_TEMPLATE: &str = r#"Analyze this professional text and provide:
1. List of skills (technical and soft)
2. Career recommendations
3. Market insights
4. Career progression path

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["Rust", "Team leadership"],
  "recommendations": ["Contribute to an open-source async runtime"],
  "market_insights": {
    "trends": ["Platform engineering teams are growing"],
    "in_demand_skills": ["Kubernetes"],
    "salary_range": {"min": 90000, "max": 150000, "average": 120000}
  },
  "career_path": {
    "current": "Backend Engineer",
    "next": ["Senior Backend Engineer"],
    "long_term": ["Principal Engineer"]
  }
}

Salaries are yearly amounts in USD. Use empty arrays when nothing applies.

Text:
{text}"#;
