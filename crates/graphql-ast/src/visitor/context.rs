use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// A cheap, clonable handle for cooperatively cancelling a traversal.
///
/// Cancellation is advisory and checkpoint-granular: the traversal engine
/// polls the token before entering each node, so a hook already running
/// when [`cancel`](CancellationToken::cancel) is called finishes its own
/// body, and no further nodes are entered afterwards.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation. Irreversible for this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Caller-owned mutable state threaded through one traversal.
///
/// The traversal engine maintains [`current_depth`] (incremented when a
/// node is entered, decremented when it is left) and polls
/// [`is_cancelled`] before entering each node. [`max_depth`] is an
/// accumulator for depth analyses (see
/// [`MaxDepthVisitor`](crate::visitor::MaxDepthVisitor)); it is
/// monotonically non-decreasing during a traversal and is never rolled
/// back, even when the traversal stops early.
///
/// A context's lifetime spans exactly one traversal call. Contexts must
/// not be shared across concurrently-running traversals; reusing one
/// sequentially requires the caller to reset it explicitly.
///
/// [`current_depth`]: VisitorContext::current_depth
/// [`is_cancelled`]: VisitorContext::is_cancelled
/// [`max_depth`]: VisitorContext::max_depth
pub trait VisitorContext {
    /// Polled by the engine before each node is entered. Defaults to
    /// never cancelled.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// The number of nodes currently entered but not yet left, counting
    /// the root as 1.
    fn current_depth(&self) -> usize;

    /// Called only by the traversal engine.
    fn set_current_depth(&mut self, depth: usize);

    /// The maximum depth recorded so far.
    fn max_depth(&self) -> usize;

    fn set_max_depth(&mut self, depth: usize);
}

/// The default [`VisitorContext`]: depth counters starting at zero and an
/// optional [`CancellationToken`].
#[derive(Clone, Debug, Default)]
pub struct DepthContext {
    current_depth: usize,
    max_depth: usize,
    cancellation: Option<CancellationToken>,
}

impl DepthContext {
    /// A fresh context with no cancellation token.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh context that polls `token` before entering each node.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..Self::default()
        }
    }
}

impl VisitorContext for DepthContext {
    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    fn current_depth(&self) -> usize {
        self.current_depth
    }

    fn set_current_depth(&mut self, depth: usize) {
        self.current_depth = depth;
    }

    fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
    }
}
