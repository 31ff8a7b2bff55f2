// crates/core/src/coach.rs
//! Prompt template for the FOKUS coach.

/// Question used when the client does not ask one.
pub const DEFAULT_QUESTION: &str = "Design a 7-day deep-work protocol around my strongest times and best-performing environments.";

/// Wrap the statistics summary and the user's question into the coach prompt.
pub fn build_coach_prompt(stats_summary: &str, question: &str) -> String {
    format!(
        "You are FOKUS Coach.\n\
         \n\
         User data:\n\
         {stats_summary}\n\
         \n\
         User question:\n\
         \"{question}\"\n\
         \n\
         Return:\n\
         - A 7-day protocol (3–5 bullets)\n\
         - 2–3 environment recommendations\n\
         - 2 rules per session\n\
         Keep it tactical and based on data.",
        question = question.trim(),
    )
}
