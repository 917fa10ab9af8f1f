/// Chain connectivity report surfaced by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStatus {
    pub connected: bool,
    pub current_block: Option<u64>,
}

/// Stub gateway to the ledger chain.
///
/// The status endpoint reports chain connectivity, but the backend does not
/// yet speak to a node; this gateway always reports disconnected.
pub struct ChainGateway;

impl ChainGateway {
    pub fn new() -> Self {
        Self
    }

    /// Probe the chain connection.
    pub async fn status(&self) -> ChainStatus {
        ChainStatus {
            connected: false,
            current_block: None,
        }
    }
}

impl Default for ChainGateway {
    fn default() -> Self {
        Self::new()
    }
}
