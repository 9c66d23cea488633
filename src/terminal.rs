// src/terminal.rs
//! Interactive chat in the terminal, for trying a reply source without a
//! frontend. Each line goes through the same relay as `POST /chat`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::message::ChatRequest;
use crate::services::relay::relay;
use crate::state::AppState;

const EXIT_WORDS: &[&str] = &["quit", "exit"];

pub async fn run_chat<R, W>(state: &AppState, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let banner = format!(
        "{} initialized ({} replies). Type 'quit' to exit.\n",
        state.bot_name,
        state.reply_source.name()
    );
    output.write_all(banner.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"\nYou: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if EXIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
            output.write_all(b"Bot: Goodbye!\n").await?;
            break;
        }

        let answer = match ChatRequest::new(line) {
            Ok(request) => match relay(state.reply_source.as_ref(), &request, state.reply_timeout).await {
                Ok(reply) => reply.reply,
                Err(err) => format!("[{}] {err}", err.status().as_u16()),
            },
            Err(_) => continue,
        };
        output
            .write_all(format!("Bot: {answer}\n").as_bytes())
            .await?;
    }

    output.flush().await
}

/// Runs [`run_chat`] on stdin/stdout.
pub async fn run_stdio_chat(state: &AppState) -> std::io::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_chat(state, stdin, tokio::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reply_source::EchoReplySource;
    use std::sync::Arc;
    use std::time::Duration;

    fn echo_state() -> AppState {
        AppState::new(Arc::new(EchoReplySource), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn answers_each_line_until_quit() {
        let input: &[u8] = b"Hello!\n\n  how are you  \nquit\nnever read\n";
        let mut output = Vec::new();
        run_chat(&echo_state(), input, &mut output).await.unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Type 'quit' to exit."));
        assert!(transcript.contains("Bot: You said: Hello!\n"));
        assert!(transcript.contains("Bot: You said: how are you\n"));
        assert!(transcript.contains("Bot: Goodbye!"));
        assert!(!transcript.contains("never read"));
    }

    #[tokio::test]
    async fn banner_and_goodbye_frame_the_session() {
        let state = echo_state().with_bot_name("TestBot");
        let input: &[u8] = b"EXIT\n";
        let mut output = Vec::new();
        run_chat(&state, input, &mut output).await.unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(
            transcript,
            "TestBot initialized (echo replies). Type 'quit' to exit.\n\nYou: Bot: Goodbye!\n"
        );
    }

    #[tokio::test]
    async fn stops_at_end_of_input() {
        let input: &[u8] = b"hi\n";
        let mut output = Vec::new();
        run_chat(&echo_state(), input, &mut output).await.unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Bot:").count(), 1);
    }
}
