//! Interactive question loop over stdin.

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use velora_chat::suggestions::dataset_example_queries;
use velora_chat::{Dispatcher, Message, Role};
use velora_ocean::AnalysisBackend;

const PROMPT: &str = "velora> ";
const QUIT: &str = "/quit";

pub async fn run_chat<B: AnalysisBackend>(backend: &B, mut dispatcher: Dispatcher) -> anyhow::Result<()> {
    println!("Ask about ocean temperature or salinity. Type {} to leave.", QUIT);
    println!("Try:");
    for example in dataset_example_queries() {
        println!("  {}", example);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        let seen = dispatcher.conversation().messages().len();
        dispatcher.submit(backend, &line).await;
        for reply in replies_since(dispatcher.conversation().messages(), seen) {
            println!("{}", reply);
        }
    }

    log::info!(
        "Chat ended after {} messages",
        dispatcher.conversation().messages().len()
    );
    Ok(())
}

/// Assistant messages appended after index `seen`, errors marked.
pub fn replies_since(messages: &[Message], seen: usize) -> Vec<String> {
    messages
        .iter()
        .skip(seen)
        .filter(|msg| msg.role == Role::Ai)
        .map(|msg| {
            if msg.is_error {
                format!("error: {}", msg.text)
            } else {
                msg.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_skip_user_echo_and_old_messages() {
        let messages = vec![
            Message::user("Pacific Ocean 2020"),
            Message::ai("Analysed Pacific Ocean"),
            Message::user("Mars 2020"),
            Message::ai_error("Unknown region"),
        ];
        assert_eq!(
            replies_since(&messages, 2),
            vec!["error: Unknown region".to_string()]
        );
        assert_eq!(replies_since(&messages, 4), Vec::<String>::new());
    }
}
