// Prompt constants and the prompt builder for relevance scoring.

/// System instruction sent with every scoring call.
pub const SCORING_SYSTEM: &str = "\
You are the AI Hawk Relevance Scorer. Analyze a Job Description (JD) against a candidate profile.
Score each of the following criteria from 0 to 100, then compute weighted_score as the weighted sum:
- Cloud Usage (20%): hands-on use of managed cloud compute and serverless platforms.
- Database Usage (20%): managed relational or document databases.
- AI Usage (20%): generative AI models and ML platform services.
- Functional Demo (15%): a working, demonstrable project relevant to the JD.
- Blog Excellence (15%): quality of written technical communication.
- Industry Impact (10%): measurable outcomes in a relevant industry.
List the JD keywords the profile does not cover in missing_keywords.
You MUST return the output as a JSON object matching the provided schema.";

/// A fully composed generation request: fixed system instruction plus the
/// per-request user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPrompt<'a> {
    pub system_instruction: &'a str,
    pub prompt: String,
}

/// Composes the scoring request. Pure and deterministic.
pub fn build_scoring_prompt<'a>(
    profile: &str,
    system_instruction: &'a str,
    job_description: &str,
) -> ScoringPrompt<'a> {
    let prompt = format!(
        "Candidate Profile (Context):\n{profile}\n\n\
         Job Description to Score:\n{job_description}\n\n\
         Perform the scoring and identify missing keywords based on the six criteria."
    );

    ScoringPrompt {
        system_instruction,
        prompt,
    }
}
