//! Transport that forwards requests to a task over an mpsc channel.

use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use super::{Transport, TransportError, TransportRequest};

/// Forwards every request to the receiver returned by [`ChannelTransport::new`].
///
/// The task owning the receiver is responsible for the actual connection.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: mpsc::UnboundedSender<TransportRequest>,
}

impl ChannelTransport {
    /// Creates the transport and the receiving end for the connection task.
    #[instrument]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TransportRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Transport for ChannelTransport {
    #[instrument(skip(self))]
    fn send(&mut self, request: TransportRequest) -> Result<(), TransportError> {
        debug!("Forwarding request to connection task");
        self.sender.send(request).map_err(|e| {
            warn!(request = ?e.0, "Connection task has gone away");
            TransportError::new("transport channel closed")
        })
    }
}
