//! The session loop: stdin lines, pastes and bus events.

use colorsync_common::{ColorsyncError, Event, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast::error::RecvError;

use super::core::ColorsyncApp;
use crate::action::Action;

async fn emit<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

impl ColorsyncApp {
    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Registers the paste handler for the lifetime of the loop and
    /// publishes [`Event::Shutdown`] on the way out.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut pastes = self
            .paste_slot
            .subscribe()
            .map_err(|e| ColorsyncError::Other(e.to_string()))?;
        let mut events = self.event_bus.subscribe();
        let mut lines = input.lines();

        emit(out, &self.render()).await?;

        while !self.should_exit {
            tokio::select! {
                biased;

                Some(text) = pastes.recv() => {
                    let reply = self.handle_paste(&text);
                    emit(out, &reply).await?;
                }
                event = events.recv() => match event {
                    Ok(Event::CopyFeedback { format, active: false }) => {
                        emit(out, &format!("({format} copy indicator cleared)")).await?;
                    }
                    Ok(event) => tracing::trace!(?event, "bus event"),
                    Err(RecvError::Lagged(n)) => tracing::debug!(n, "event receiver lagged"),
                    Err(RecvError::Closed) => break,
                },
                line = lines.next_line() => match line? {
                    Some(line) => match line.parse::<Action>() {
                        Ok(action) => {
                            if let Some(reply) = self.dispatch(action).await {
                                emit(out, &reply).await?;
                            }
                        }
                        Err(msg) => emit(out, &msg).await?,
                    },
                    None => {
                        tracing::debug!("end of input");
                        break;
                    }
                },
            }
        }

        drop(pastes);
        self.event_bus.publish(Event::Shutdown);
        tracing::info!("session ended");
        Ok(())
    }
}
