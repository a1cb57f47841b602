//! Prompt engineering for the alternate-life simulation.
//!
//! The prompt pins the exact section skeleton the extractor matches on:
//! four `YEAR <n>:` blocks with `Wins:`/`Struggles:`, an `ENDING:`, the
//! lost-from-path bullet list, and the grass-is-greener score.

use forked_domain::SubmissionInput;

/// Placeholder for optional context fields the user left blank.
const NOT_SPECIFIED: &str = "Not specified";

/// Risk level assumed when none was given.
const DEFAULT_RISK: &str = "Medium";

/// Builds the simulation prompt for one submission.
pub struct SimulationPrompt<'a> {
    input: &'a SubmissionInput,
}

impl<'a> SimulationPrompt<'a> {
    /// Create a prompt builder over a submission.
    pub fn new(input: &'a SubmissionInput) -> Self {
        Self { input }
    }

    /// Build the complete prompt text.
    pub fn build(&self) -> String {
        let profession = non_empty_or(&self.input.profession, NOT_SPECIFIED);
        let location = non_empty_or(&self.input.location, NOT_SPECIFIED);
        let risk = non_empty_or(&self.input.risk, DEFAULT_RISK);

        let mut prompt = String::new();

        prompt.push_str(SIMULATION_ROLE);
        prompt.push_str("\n\nUser Context:\n");
        prompt.push_str(&format!("Age: {}\n", self.input.age));
        prompt.push_str(&format!("Profession: {}\n", profession));
        prompt.push_str(&format!("Location: {}\n", location));
        prompt.push_str(&format!("Risk Level: {}\n\n", risk));

        prompt.push_str("Simulate a 10-year alternate life timeline based on this decision:\n");
        prompt.push_str(&format!("\"{}\"\n\n", self.input.decision));

        prompt.push_str(CRITICAL_RULE);
        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_STRUCTURE);

        prompt
    }
}

const SIMULATION_ROLE: &str =
    "You are a behavioral life simulation engine focused on trade-offs and psychological realism.";

const CRITICAL_RULE: &str = "CRITICAL RULE:\nFor every WIN listed, include at least one STRUGGLE that does NOT exist in current life.";

const OUTPUT_STRUCTURE: &str = r#"Follow this structure EXACTLY:

YEAR 1:
Wins:
Struggles:

YEAR 3:
Wins:
Struggles:

YEAR 5:
Wins:
Struggles:

YEAR 10:
Wins:
Struggles:

ENDING:

WHAT THEY WOULD HAVE LOST FROM THEIR CURRENT LIFE:
- Bullet points

GRASS IS GREENER SCORE:
Number from 1-100 with short explanation.

No markdown.
No extra commentary.
"#;

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
