//! Bulk "query in pages" over the remote bidirectional stream.

use crate::dto::User;
use crate::users_remote::UsersRemote;
use futures::StreamExt;
use gateway_core::{GatewayResult, PaginationRequest};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info};

/// Number of pages requested by the email batch.
pub const EMAIL_BATCH_PAGES: u32 = 4;
/// Page size used by the email batch.
pub const EMAIL_BATCH_SKIP: u32 = 25;

/// Receives each inbound chunk with its 1-based arrival number.
pub type ChunkHandler = Arc<dyn Fn(u64, &[User]) + Send + Sync>;

/// Feeds a fixed page sequence into `queryUsers` and numbers the chunks that come back.
#[derive(Clone)]
pub struct PaginationQueryStreamer {
    remote: Arc<dyn UsersRemote>,
    handler: ChunkHandler,
}

impl PaginationQueryStreamer {
    /// Creates a streamer that logs every chunk.
    pub fn new(remote: Arc<dyn UsersRemote>) -> Self {
        Self::with_handler(remote, Arc::new(log_chunk))
    }

    /// Creates a streamer with a custom chunk handler.
    pub fn with_handler(remote: Arc<dyn UsersRemote>, handler: ChunkHandler) -> Self {
        Self { remote, handler }
    }

    /// Pages 0 through 3, each with skip 25.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the batch page size is zero.
    pub fn email_batch() -> GatewayResult<Vec<PaginationRequest>> {
        PaginationRequest::sequence(EMAIL_BATCH_PAGES, EMAIL_BATCH_SKIP)
    }

    /// Starts the email batch query in the background.
    ///
    /// Returns immediately; the handle may be dropped.
    pub fn start(&self) -> JoinHandle<()> {
        let remote = Arc::clone(&self.remote);
        let handler = Arc::clone(&self.handler);

        tokio::spawn(async move {
            let requests = match Self::email_batch() {
                Ok(requests) => requests,
                Err(e) => {
                    error!(error = %e, "Invalid email batch");
                    return;
                }
            };

            let delivered = run_query(remote.as_ref(), handler.as_ref(), requests).await;
            debug!(chunks = delivered, "Users query stream finished");
        })
    }
}

/// Sends `requests` in order, closes the outbound side, then drains the inbound side.
///
/// Returns the number of chunks handed to `handler`.
pub async fn run_query(
    remote: &dyn UsersRemote,
    handler: &(dyn Fn(u64, &[User]) + Send + Sync),
    requests: Vec<PaginationRequest>,
) -> u64 {
    let (tx, rx) = mpsc::channel(requests.len().max(1));
    for request in requests {
        if tx.send(request).await.is_err() {
            break;
        }
    }
    drop(tx);

    let mut inbound = match remote.query_users(ReceiverStream::new(rx).boxed()).await {
        Ok(stream) => stream,
        Err(e) => {
            error!(error = %e, "Failed to open users query stream");
            return 0;
        }
    };

    let mut chunk_number = 0;
    while let Some(chunk) = inbound.next().await {
        match chunk {
            Ok(users) => {
                chunk_number += 1;
                handler(chunk_number, &users);
            }
            Err(e) => {
                error!(error = %e, after_chunk = chunk_number, "Users query stream failed");
                break;
            }
        }
    }

    chunk_number
}

fn log_chunk(chunk_number: u64, users: &[User]) {
    info!(chunk = chunk_number, count = users.len(), users = ?users, "Chunk");
}
