#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("a paste handler is already registered")]
    PasteHandlerActive,
}
