use lexbrief::prompt::{
    NOT_LEGAL_RESPONSE, SUMMARY_SECTIONS, build_combined_prompt, build_system_instruction,
    build_user_content,
};

#[test]
fn test_system_instruction_lists_sections_in_order() {
    let instruction = build_system_instruction(600);

    let mut last = 0;
    for (i, heading) in SUMMARY_SECTIONS.iter().enumerate() {
        let numbered = format!("{}. {}", i + 1, heading);
        let pos = instruction
            .find(&numbered)
            .unwrap_or_else(|| panic!("missing heading: {numbered}"));
        assert!(pos > last, "heading out of order: {numbered}");
        last = pos;
    }
}

#[test]
fn test_system_instruction_carries_word_budget() {
    let instruction = build_system_instruction(1234);
    assert!(instruction.contains("approximately 1234 words not more than that"));
    assert!(instruction.contains(NOT_LEGAL_RESPONSE));
    assert!(instruction.starts_with("You are a legal summarisation expert."));
}

#[test]
fn test_system_instruction_only_varies_by_budget() {
    let a = build_system_instruction(100);
    let b = build_system_instruction(200);
    assert_ne!(a, b);
    assert_eq!(a.replace("100", "200"), b);
}

#[test]
fn test_user_content_trims_document() {
    let content = build_user_content("\n\n  IN THE HIGH COURT OF DELHI  \n");
    assert_eq!(
        content,
        "Here is the text of the document:\nIN THE HIGH COURT OF DELHI"
    );
}

#[test]
fn test_user_content_keeps_inner_text_verbatim() {
    let document = "Para 1.\n\n--- Page 2 ---\n\nPara  2.";
    let content = build_user_content(document);
    assert!(content.ends_with(document));
}

#[test]
fn test_combined_prompt() {
    let combined = build_combined_prompt("SYSTEM", "USER");
    assert_eq!(combined, "SYSTEM\n\nUSER");
}
