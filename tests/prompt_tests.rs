use docqa::prompt::{PROMPT_INSTRUCTION, build_prompt};

#[test]
fn test_prompt_shape_is_exact() {
    let prompt = build_prompt("Paris is the capital of France.", "What is the capital?");

    assert_eq!(
        prompt,
        "Answer the question based only on the information provided between ## and give short answers.\n    \
         #Paris is the capital of France.#\n    \
         Question: What is the capital?\n    \
         Answer:"
    );
}

#[test]
fn test_prompt_embeds_document_and_question() {
    let prompt = build_prompt("some document text", "some question");

    assert!(prompt.starts_with(PROMPT_INSTRUCTION));
    assert!(prompt.contains("#some document text#"));
    assert!(prompt.contains("Question: some question"));
    assert!(prompt.ends_with("Answer:"));
}

#[test]
fn test_prompt_with_empty_question() {
    // The handler never sends an empty question, but the prompt builder
    // itself stays total.
    let prompt = build_prompt("doc", "");
    assert!(prompt.contains("Question: \n"));
}
