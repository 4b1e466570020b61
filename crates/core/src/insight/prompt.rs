//! Prompt text and response schemas.

use serde_json::{Value, json};

use super::summary::FinancialSummary;

/// Persona given to the model for financial analysis.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a senior financial analyst providing insights for a CFO.";

/// Builds the financial analysis prompt around a serialized summary.
///
/// # Errors
///
/// Returns the serializer error if the summary cannot be rendered as JSON.
pub fn financial_prompt(summary: &FinancialSummary) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(summary)?;
    Ok(format!(
        "Analyze the following business financial summary. Focus on:\n\
         1. Profitability (Net Income margin).\n\
         2. Liquidity (Can they pay bills with current cash + receivables?).\n\
         3. One strategic recommendation regarding AR/AP management.\n\
         \n\
         Data: {data}"
    ))
}

/// Builds the job description prompt.
#[must_use]
pub fn job_description_prompt(title: &str, department: &str) -> String {
    format!(
        "Create a job description and list of 5 key requirements for a {title} in the {department} department."
    )
}

/// Structured-output schema for a drafted job description.
#[must_use]
pub fn job_description_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "requirements": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::BusinessData;

    #[test]
    fn test_financial_prompt_embeds_summary() {
        let summary = FinancialSummary::from_data(&BusinessData::default()).unwrap();
        let prompt = financial_prompt(&summary).unwrap();

        assert!(prompt.starts_with("Analyze the following business financial summary."));
        assert!(prompt.contains("3. One strategic recommendation regarding AR/AP management."));
        assert!(prompt.contains("Data: {\"totalAssets\":0.0,"));
    }

    #[test]
    fn test_job_description_prompt() {
        assert_eq!(
            job_description_prompt("QA Tester", "Quality Assurance"),
            "Create a job description and list of 5 key requirements for a QA Tester in the Quality Assurance department."
        );
    }

    #[test]
    fn test_schema_shape() {
        let schema = job_description_schema();
        assert_eq!(schema["properties"]["requirements"]["items"]["type"], "STRING");
    }
}
