//! The two fixed prompt templates and their generation settings.
//!
//! Kept separate from the HTTP layer so templates can be unit-tested without
//! a network dependency.

use crate::dtos::Experience;
use serde_json::json;

/// Output cap for the detailed analysis.
pub const DETAIL_MAX_OUTPUT_TOKENS: i32 = 8192;

/// Creativity setting for the detailed analysis.
pub const DETAIL_TEMPERATURE: f32 = 0.7;

/// Instruction prompt for `POST /generate`: exactly 15 problem statements
/// for the submitted founder profile, as schema-constrained JSON.
pub fn problem_statements_prompt(
    category: &str,
    experience: &Experience,
    mode: &str,
    goals: &str,
) -> String {
    format!(
        "You are a business research assistant. A user has shared their profile:\n\
         - Business category: {category}\n\
         - Years of experience: {experience}\n\
         - Business mode: {mode}\n\
         - Goals: {goals}\n\n\
         Generate exactly 15 real-world problem statements relevant to this profile. \
         Each entry must describe a genuine problem people or businesses face today, \
         NOT a business idea, product, or solution. Order the entries 1 through 15.\n\n\
         Return a JSON array of exactly 15 objects. Each object must have:\n\
         - \"s_no\": the serial number (1 to 15)\n\
         - \"business_title\": a one-sentence description of the problem\n\
         - \"detail\": a one-line explanation of why this problem matters\n\n\
         Respond with the JSON array only."
    )
}

/// Response schema forwarded to the generative API alongside the
/// problem-statement prompt. Constrains each item to the three required
/// fields; the 15-item count is enforced by the prompt text.
pub fn problem_statements_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "s_no": { "type": "NUMBER" },
                "business_title": { "type": "STRING" },
                "detail": { "type": "STRING" }
            },
            "required": ["s_no", "business_title", "detail"]
        }
    })
}

/// Instruction prompt for `POST /generate-detail`: a long-form free-text
/// analysis of one problem statement, shaped into 15 named sections. The
/// serialized founder profile is embedded verbatim.
pub fn detailed_analysis_prompt(business_title: &str, user_data_json: &str) -> String {
    format!(
        "You are a senior business analyst. Write a detailed analysis of the \
         following problem statement for the user whose profile is given below.\n\n\
         Problem statement: {business_title}\n\
         User profile: {user_data_json}\n\n\
         Write at least 1000 words of plain narrative text, organized into \
         exactly these 15 sections, each with its heading:\n\
         1. Problem Overview\n\
         2. Why This Problem Exists\n\
         3. Who Is Affected\n\
         4. Market Size and Demand\n\
         5. Existing Solutions\n\
         6. Gaps in Existing Solutions\n\
         7. Proposed Business Direction\n\
         8. Fit With the User's Profile\n\
         9. Revenue Model Possibilities\n\
         10. Required Skills and Resources\n\
         11. Estimated Startup Costs\n\
         12. Competition Analysis\n\
         13. Risks and Challenges\n\
         14. Growth and Scaling Potential\n\
         15. First 90 Days Action Plan\n\n\
         Do not return JSON or markdown tables; write flowing prose under each \
         section heading."
    )
}
