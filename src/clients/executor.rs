//! Callback-style execution of REST calls on the Tokio runtime.
//!
//! [`spawn_call`] starts a call in the background and returns an
//! [`ExecutionHandle`] immediately. The continuation runs exactly once:
//! with the call's outcome, with [`ResourceError::Cancelled`] if the handle
//! cancelled it first, or with a [`TransportError`] of kind
//! [`Aborted`](crate::clients::TransportErrorKind::Aborted) if the round
//! trip panicked.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::clients::errors::{TransportError, TransportErrorKind};
use crate::rest::ResourceError;

/// A handle to a call started with [`spawn_call`].
///
/// Dropping the handle detaches the call; the continuation still runs.
#[derive(Debug)]
pub struct ExecutionHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ExecutionHandle {
    /// Cancels the call.
    ///
    /// If the call has not completed, the in-flight round trip is aborted
    /// and the continuation receives [`ResourceError::Cancelled`]. Returns
    /// `false` if the call had already completed or was already cancelled;
    /// the continuation is never invoked a second time.
    pub fn cancel(&mut self) -> bool {
        self.cancel
            .take()
            .is_some_and(|sender| sender.send(()).is_ok())
    }

    /// Returns `true` once the continuation has returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits until the continuation has returned.
    pub async fn join(self) {
        if let Err(error) = self.task.await {
            tracing::warn!("Continuation did not complete: {}", error);
        }
    }
}

/// Starts `call` in the background and delivers its outcome to
/// `continuation`.
///
/// Returns without waiting for the call. The call itself runs in its own
/// task so a panic inside it is reported to the continuation instead of
/// being lost.
///
/// # Errors
///
/// Returns a [`TransportError`] of kind
/// [`Aborted`](TransportErrorKind::Aborted) if no Tokio runtime is
/// available on the current thread. The continuation is not invoked in
/// that case.
pub fn spawn_call<V, F, C>(call: F, continuation: C) -> Result<ExecutionHandle, TransportError>
where
    V: Send + 'static,
    F: Future<Output = Result<V, ResourceError>> + Send + 'static,
    C: FnOnce(Result<V, ResourceError>) + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|e| {
        TransportError::new(TransportErrorKind::Aborted, format!("no async runtime: {e}"))
    })?;

    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
    let inner = runtime.clone();

    let task = runtime.spawn(async move {
        let mut round_trip = inner.spawn(call);

        // A dropped handle closes the channel, which disables the first branch.
        let outcome = tokio::select! {
            Ok(()) = &mut cancel_rx => {
                round_trip.abort();
                tracing::warn!("Call cancelled before completion");
                Err(ResourceError::Cancelled)
            }
            joined = &mut round_trip => {
                joined.unwrap_or_else(|e| Err(ResourceError::Transport(e.into())))
            }
        };
        // Once an outcome is chosen, cancel() must report false.
        drop(cancel_rx);

        continuation(outcome);
    });

    Ok(ExecutionHandle {
        cancel: Some(cancel_tx),
        task,
    })
}
