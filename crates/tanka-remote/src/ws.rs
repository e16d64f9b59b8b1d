use futures_util::StreamExt;
use kanal::AsyncSender;
use serde::{Deserialize, Serialize};
use tanka_types::PhraseDocument;
use tokio_tungstenite::connect_async;
use tokio_util::sync::CancellationToken;

use crate::RemoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

/// One change frame pushed by the document store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub doc: PhraseDocument,
}

/// Added document carried by a text frame, if any
pub fn decode_change(text: &str) -> Option<PhraseDocument> {
    match serde_json::from_str::<ChangeEvent>(text) {
        Ok(ChangeEvent {
            kind: ChangeKind::Added,
            doc,
        }) => Some(doc),
        Ok(event) => {
            tracing::trace!("Ignoring {:?} change for '{}'", event.kind, event.doc.text);
            None
        }
        Err(e) => {
            tracing::warn!("Undecodable change frame: {}", e);
            None
        }
    }
}

/// Connect to `url` and forward every added document to `tx` until
/// `cancel` fires or the socket closes
pub async fn start_change_listener(
    url: &str,
    tx: AsyncSender<PhraseDocument>,
    cancel: CancellationToken,
) -> Result<(), RemoteError> {
    let (ws_stream, _) = connect_async(url).await?;
    let (_, mut read) = ws_stream.split();

    tracing::info!("Listening for phrase changes on {}", url);

    tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                _ = cancel.cancelled() => break,
                msg = read.next() => msg,
            };

            match msg {
                Some(Ok(msg)) if msg.is_text() => {
                    let Ok(text) = msg.to_text() else {
                        continue;
                    };
                    if let Some(doc) = decode_change(text)
                        && tx.send(doc).await.is_err()
                    {
                        tracing::debug!("Subscriber gone, closing change listener");
                        break;
                    }
                }
                Some(Ok(msg)) if msg.is_close() => {
                    tracing::warn!("Change stream closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("Change stream error: {}", e);
                    break;
                }
                None => {
                    tracing::warn!("Change stream ended");
                    break;
                }
            }
        }

        tracing::debug!("Change listener stopped");
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanka_types::PhraseClass;

    #[test]
    fn test_added_frames_yield_documents() {
        let frame = r#"{"type":"added","doc":{"type":"7","text":"かわずとびこむ","reading":"かわずとびこむ","createdAt":5}}"#;

        let doc = decode_change(frame).unwrap();
        assert_eq!(doc.class, PhraseClass::Seven);
        assert_eq!(doc.text, "かわずとびこむ");
        assert_eq!(doc.created_at, 5);
    }

    #[test]
    fn test_other_frames_are_skipped() {
        let modified =
            r#"{"type":"modified","doc":{"type":"5","text":"ふるいけや","createdAt":1}}"#;
        assert!(decode_change(modified).is_none());
        assert!(decode_change("not json").is_none());
        assert!(decode_change(r#"{"type":"added"}"#).is_none());
    }
}
