use crate::config::Config;
use crate::conversation::Message;

/// Builds the single-turn grounding prompt. Prior conversation turns are
/// deliberately not sent: every question is answered from the retrieved
/// context alone. Also returns the joined context for display.
pub fn build_prompt(cfg: &Config, question: &str, context_chunks: &[String]) -> (Vec<Message>, String) {
    let context = format_context(context_chunks);

    let content = format!(
        "{}\nAnswer the user's question based *only* on the following context:\n\n\
         ---CONTEXT---\n{}\n---END CONTEXT---\n\n\
         Question: {}\n\nAnswer:",
        cfg.persona, context, question
    );

    (vec![Message::user(content)], context)
}

pub fn format_context(chunks: &[String]) -> String {
    if chunks.is_empty() {
        "(no context found)".to_string()
    } else {
        chunks.join("\n\n")
    }
}
