/// Instruction line that opens every prompt.
pub const PROMPT_INSTRUCTION: &str =
    "Answer the question based only on the information provided between ## and give short answers.";

/// Build the question-answering prompt sent to the model.
///
/// The shape is fixed: the instruction line, the document between `#`
/// delimiters, then the question and a trailing `Answer:` cue. The inner
/// lines carry a four-space indent; the shape must stay byte-stable.
#[must_use]
pub fn build_prompt(document: &str, question: &str) -> String {
    format!(
        "{PROMPT_INSTRUCTION}\n    #{document}#\n    Question: {question}\n    Answer:"
    )
}
