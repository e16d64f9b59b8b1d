use std::io::Write;

use kanal::AsyncReceiver;
use tanka_types::{AppEvent, StatusLevel, StatusMessage, Tanka};
use tokio_util::sync::CancellationToken;

/// Terminal output loop; everything user-facing goes to stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write_events(app_to_ui_rx, cancel, &mut stdout).await
}

/// Render events to `out` until cancelled or the channel closes.
/// Events already queued when the token fires are still written.
pub async fn write_events<W: Write>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    out: &mut W,
) -> anyhow::Result<()> {
    loop {
        // Receive first so a send completed before cancellation is not dropped
        let event = tokio::select! {
            biased;
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => {
                while let Ok(Some(event)) = app_to_ui_rx.try_recv() {
                    write_event(out, event)?;
                }
                break;
            }
        };

        write_event(out, event)?;
    }

    out.flush()?;
    Ok(())
}

fn write_event<W: Write>(out: &mut W, event: AppEvent) -> std::io::Result<()> {
    match event {
        AppEvent::ShowTanka(tanka) => writeln!(out, "\n{}\n", render_tanka(&tanka)),
        AppEvent::Status(status) => writeln!(out, "{}", render_status(&status)),
        _ => {
            tracing::debug!("UI ignoring {:?}", std::mem::discriminant(&event));
            Ok(())
        }
    }
}

pub fn render_tanka(tanka: &Tanka) -> String {
    tanka
        .lines
        .iter()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_status(status: &StatusMessage) -> String {
    let prefix = match status.level {
        StatusLevel::Info => "",
        StatusLevel::Success => "✓ ",
        StatusLevel::Warning => "! ",
        StatusLevel::Error => "✗ ",
    };
    format!("{prefix}{}", status.text)
}
