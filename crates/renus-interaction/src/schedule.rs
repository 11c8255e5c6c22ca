//! Cancellable timer primitives.
//!
//! Every artificial delay in a response cycle runs through
//! [`sleep_unless_revoked`], bound to the cancellation token of the
//! runner's current epoch. Reset and teardown cancel the epoch, so a
//! pending delay resolves immediately as revoked and its cycle stops
//! before touching the transcript again.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Sleeps for `duration` unless `token` is revoked first.
///
/// Returns `true` when the full duration elapsed, `false` when the token
/// was revoked. Callers must stop the cycle on `false`; the transcript
/// they were driving no longer exists or has been reseeded.
pub async fn sleep_unless_revoked(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(duration) => true,
    }
}
