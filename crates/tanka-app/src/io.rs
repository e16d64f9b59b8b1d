use std::io::BufRead;

use kanal::AsyncSender;
use tanka_types::{AppEvent, PhraseClass, PhraseSubmission, StatusMessage};
use tokio::runtime::Handle;

/// Translate one input line into an event; blank lines yield nothing
pub fn parse_command(line: &str) -> Result<Option<AppEvent>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };

    match command {
        "gen" | "generate" | "g" => Ok(Some(AppEvent::GenerateTanka)),
        "add" | "a" => {
            let class = parts
                .next()
                .ok_or("usage: add <5|7> <phrase> [reading]")?
                .parse::<PhraseClass>()
                .map_err(|e| e.to_string())?;
            let text = parts
                .next()
                .ok_or("usage: add <5|7> <phrase> [reading]")?
                .to_string();
            let reading = parts.next().map(str::to_string);

            if parts.next().is_some() {
                return Err("too many words: phrase and reading must not contain spaces".to_string());
            }

            Ok(Some(AppEvent::SubmitPhrase(PhraseSubmission {
                class,
                text,
                reading,
            })))
        }
        "help" | "h" | "?" => Ok(Some(AppEvent::Help)),
        "quit" | "exit" | "q" => Ok(Some(AppEvent::Shutdown)),
        other => Err(format!("unknown command '{other}', type help")),
    }
}

/// Read stdin lines on a dedicated thread and forward them as events.
/// End of input ends the session.
pub fn watch_stdin(tx: AsyncSender<AppEvent>) {
    let handle = Handle::current();

    if atty::is(atty::Stream::Stdin) {
        println!("type 'help' for commands");
    }

    std::thread::spawn(move || {
        let stdin = std::io::stdin();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            };

            let event = match parse_command(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(message) => AppEvent::Status(StatusMessage::error(message)),
            };
            let quit = matches!(event, AppEvent::Shutdown);

            if handle.block_on(tx.send(event)).is_err() {
                tracing::debug!("Event loop gone, stdin watcher stopping");
                return;
            }
            if quit {
                return;
            }
        }

        tracing::info!("Input closed");
        let _ = handle.block_on(tx.send(AppEvent::Shutdown));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_and_without_reading() {
        match parse_command("add 5 古池や ふるいけや") {
            Ok(Some(AppEvent::SubmitPhrase(sub))) => {
                assert_eq!(sub.class, PhraseClass::Five);
                assert_eq!(sub.text, "古池や");
                assert_eq!(sub.reading.as_deref(), Some("ふるいけや"));
            }
            other => panic!("unexpected: {:?}", other),
        }

        match parse_command("  add 7 蛙飛び込む ") {
            Ok(Some(AppEvent::SubmitPhrase(sub))) => {
                assert_eq!(sub.class, PhraseClass::Seven);
                assert_eq!(sub.reading, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(parse_command("gen"), Ok(Some(AppEvent::GenerateTanka))));
        assert!(matches!(parse_command("quit"), Ok(Some(AppEvent::Shutdown))));
        assert!(matches!(parse_command("?"), Ok(Some(AppEvent::Help))));
        assert!(matches!(parse_command("   "), Ok(None)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("add 6 ふるいけや").is_err());
        assert!(parse_command("add 5").is_err());
        assert!(parse_command("add 5 a b c").is_err());
        match parse_command("dance") {
            Err(message) => assert_eq!(message, "unknown command 'dance', type help"),
            Ok(other) => panic!("unexpected: {:?}", other),
        }
    }
}
