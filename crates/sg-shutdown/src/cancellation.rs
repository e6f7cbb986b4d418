use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Function that moves a cancellation handle to its "done" state.
pub type Trigger = Arc<dyn Fn() + Send + Sync>;

/// A handle that transitions exactly once from "not done" to "done".
///
/// `wait` blocks the calling thread; it is called from plain OS threads,
/// never from inside an async runtime.
pub trait CancellationHandle: Send + Sync {
    fn is_cancelled(&self) -> bool;

    fn wait(&self);
}

impl CancellationHandle for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }

    fn wait(&self) {
        if !CancellationToken::is_cancelled(self) {
            futures::executor::block_on(self.cancelled());
        }
    }
}

/// Trigger that cancels the given token. Cancelling twice is a no-op.
pub fn token_trigger(token: CancellationToken) -> Trigger {
    Arc::new(move || token.cancel())
}
