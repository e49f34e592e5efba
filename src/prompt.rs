/// Phrase the model is asked to answer with when the input is not a legal document.
pub const NOT_LEGAL_RESPONSE: &str = "The document is not legal.";

/// Headings of the structured summary, in the order the model must use them.
pub const SUMMARY_SECTIONS: [&str; 6] = [
    "Case Name & Citation & Classification of the case (Civil, Criminal, etc.)",
    "Facts / Background",
    "Legal Issues",
    "Arguments of Parties  (Petitioner's and Respondent's Arguments)",
    "Court's Analysis & Reasoning",
    "Decision & Conclusion",
];

const USER_CONTENT_PREAMBLE: &str = "Here is the text of the document:";

/// Builds the system instruction for a summary of roughly `target_words` words.
///
/// The word budget is the only variable part of the template.
#[must_use]
pub fn build_system_instruction(target_words: u64) -> String {
    let headings = SUMMARY_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, heading)| format!("{}. {heading}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a legal summarisation expert. You are given a legal document and you need to summarise it in a structured format under the headings provided.\n\
Summarise the following legal document in a structured format under these headings:\n\
{headings}\n\
\n\
If the document is not legal, say \"{NOT_LEGAL_RESPONSE}\"\n\
Keep the summary to approximately {target_words} words not more than that. Use headings and sub-headings. Use clear, concise language. Avoid unnecessary legalese\u{2014}only use legal terms when essential."
    )
}

/// Wraps the document text into the user content block. The text is trimmed
/// but otherwise passed through verbatim.
#[must_use]
pub fn build_user_content(document: &str) -> String {
    format!("{USER_CONTENT_PREAMBLE}\n{}", document.trim())
}

/// Single prompt for models that do not accept a separate system instruction.
#[must_use]
pub fn build_combined_prompt(system_instruction: &str, user_content: &str) -> String {
    format!("{system_instruction}\n\n{user_content}")
}
