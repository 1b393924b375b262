// Prompt for LinkedIn profile categorization. Replace `{profile_json}` before sending.

pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Analyze this LinkedIn profile data and provide:
1. Skills categorization (technical, soft, domain)
2. Experience analysis
3. Education details
4. Career recommendations

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": {
    "technical": ["Rust", "PostgreSQL"],
    "soft": ["Mentoring"],
    "domain": ["Payments"]
  },
  "experience": {
    "level": "senior",
    "years": 8,
    "companies": ["Acme"],
    "roles": ["Backend Engineer"]
  },
  "education": {
    "degree": "BSc",
    "field": "Computer Science",
    "institutions": ["University of Somewhere"]
  },
  "recommendations": {
    "career": ["Move into a staff engineering track"],
    "skills": ["Learn Kubernetes"],
    "networking": ["Join the local Rust meetup"]
  }
}

LEVEL: "entry", "mid", "senior", "lead", or "executive".
Use empty strings or arrays when the profile has no data for a field.

Profile data:
{profile_json}"#;
