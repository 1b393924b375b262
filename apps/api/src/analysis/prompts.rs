// All LLM prompt templates for the resume analysis pipeline.
// Replace `{resume_text}` (and the context placeholders) before sending.
//
// The section headers named here are parsed verbatim by `sections.rs`. Renaming a
// header in a prompt without updating its parser silently empties that list.

pub const CLEAN_PROMPT_TEMPLATE: &str = r#"Clean and structure this resume text, maintaining all important information
but removing formatting artifacts and normalizing the structure.
Return only the cleaned resume text.

{resume_text}"#;

pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Analyze this resume's skills and:
1. Extract all technical and soft skills
2. Identify missing critical skills for the candidate's target roles
3. Categorize skills and score each category from 1 to 10

Answer using exactly these sections:

Technical and soft skills:
<one skill per line>

Missing critical skills:
<one skill per line>

Skill categories:
<Category>: <score>: <recommendation>, <recommendation>

Resume text:
{resume_text}"#;

pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Analyze this resume's content and provide:
1. Key strengths
2. Areas for improvement
3. Quantifiable achievements
4. Important keywords

Answer using exactly these sections, one item per line:

Strengths:
Improvements:
Achievements:
Keywords:

Resume text:
{resume_text}"#;

pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for ATS compatibility:
1. Calculate a compatibility score from 0 to 100
2. Rate the formatting from 0 to 100
3. Identify potential issues
4. Provide specific recommendations

Answer using exactly this layout:

Compatibility Score: <number>
Format Score: <number>

Issues:
<one issue per line>

Recommendations:
<one recommendation per line>

Resume text:
{resume_text}"#;

pub const MARKET_PROMPT_TEMPLATE: &str = r#"Analyze this resume for market fit:
1. Identify best matching job roles with a match percentage
2. Suggest suitable industries
3. Recommend work locations

Answer using exactly these sections, one item per line:

Roles:
<Role title> - <match>%

Industries:

Locations:

Resume text:
{resume_text}"#;

pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"Create a career action plan for the candidate below.

Detected skills: {detected_skills}
Missing skills: {missing_skills}
Best matching roles: {roles}

Answer using exactly these sections, one action per line:

Immediate:
Short-term:
Long-term:

Resume text:
{resume_text}"#;

pub const INSIGHTS_PROMPT_TEMPLATE: &str = r#"Share career insights for the candidate below: positioning, market trends
relevant to their profile, and anything a recruiter would notice first.

Detected skills: {detected_skills}
Missing skills: {missing_skills}
Best matching roles: {roles}

Answer with one section, one insight per line:

Insights:

Resume text:
{resume_text}"#;
