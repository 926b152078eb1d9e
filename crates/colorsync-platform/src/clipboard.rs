use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use async_trait::async_trait;
use colorsync_common::PlatformError;
use tokio::sync::oneshot;

/// Async read/write access to a clipboard.
#[async_trait]
pub trait ClipboardAccess: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), PlatformError>;

    async fn read_text(&self) -> Result<String, PlatformError>;
}

/// Cross-platform clipboard handle backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Creates a new clipboard handle.
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Reads text from the system clipboard.
    pub fn get_text(&mut self) -> Result<String, PlatformError> {
        self.inner
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    /// Writes text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

enum Request {
    Write(String, oneshot::Sender<Result<(), PlatformError>>),
    Read(oneshot::Sender<Result<String, PlatformError>>),
}

/// The system clipboard, owned by a dedicated thread.
///
/// Some platforms only serve clipboard contents while the handle that set
/// them is alive, so one handle lives for as long as this value does.
pub struct SystemClipboard {
    requests: mpsc::Sender<Request>,
}

impl SystemClipboard {
    /// Opens the system clipboard. Fails on hosts without one (headless Linux).
    ///
    /// Blocks until the clipboard thread reports in, so call it outside async
    /// code.
    pub fn open() -> Result<Self, PlatformError> {
        let (requests, rx) = mpsc::channel::<Request>();
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("clipboard".into())
            .spawn(move || {
                let mut clipboard = match Clipboard::new() {
                    Ok(clipboard) => {
                        let _ = ready_tx.send(Ok(()));
                        clipboard
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                for request in rx {
                    match request {
                        Request::Write(text, reply) => {
                            let _ = reply.send(clipboard.set_text(&text));
                        }
                        Request::Read(reply) => {
                            let _ = reply.send(clipboard.get_text());
                        }
                    }
                }
                tracing::debug!("clipboard thread exiting");
            })
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|_| PlatformError::ClipboardError("clipboard thread exited".into()))??;
        Ok(Self { requests })
    }

    fn send(&self, request: Request) -> Result<(), PlatformError> {
        self.requests
            .send(request)
            .map_err(|_| PlatformError::ClipboardError("clipboard thread exited".into()))
    }
}

#[async_trait]
impl ClipboardAccess for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), PlatformError> {
        let (tx, rx) = oneshot::channel();
        self.send(Request::Write(text, tx))?;
        rx.await
            .map_err(|_| PlatformError::ClipboardError("clipboard request dropped".into()))?
    }

    async fn read_text(&self) -> Result<String, PlatformError> {
        let (tx, rx) = oneshot::channel();
        self.send(Request::Read(tx))?;
        rx.await
            .map_err(|_| PlatformError::ClipboardError("clipboard request dropped".into()))?
    }
}

/// In-process clipboard for tests and hosts without a system clipboard.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl ClipboardAccess for MemoryClipboard {
    async fn write_text(&self, text: String) -> Result<(), PlatformError> {
        if self.fail_writes {
            return Err(PlatformError::ClipboardError("write refused".into()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        *contents = Some(text);
        Ok(())
    }

    async fn read_text(&self) -> Result<String, PlatformError> {
        self.contents
            .lock()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))?
            .clone()
            .ok_or_else(|| PlatformError::ClipboardError("clipboard is empty".into()))
    }
}
