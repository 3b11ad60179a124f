use std::fmt::{self, Debug, Formatter};
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::trace;

use crate::util::result::ResultExtension;

/// A fixed number of concurrency slots, shared by everything run through it.
///
/// Callers that find every slot taken are suspended (without blocking the thread) and resumed in
/// the order they started waiting as slots are released. A slot is held by a [`Slot`] guard, so it
/// is given back when the work finishes, fails, panics or is dropped part way through.
pub struct ConcurrencyLimit {
    semaphore: Semaphore,
    limit: usize,
}

impl ConcurrencyLimit {
    /// Creates a new ConcurrencyLimit with `limit` slots. Limits larger than Tokio supports are
    /// clamped to [`Semaphore::MAX_PERMITS`].
    pub fn new(limit: NonZeroUsize) -> ConcurrencyLimit {
        let limit = limit.get().min(Semaphore::MAX_PERMITS);

        ConcurrencyLimit {
            semaphore: Semaphore::new(limit),
            limit,
        }
    }

    /// Returns the number of slots.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of slots currently held. This never exceeds [`limit`](Self::limit).
    pub fn running(&self) -> usize {
        self.limit - self.semaphore.available_permits()
    }

    /// Waits for a free slot and takes it, returning a guard which releases the slot when dropped.
    pub async fn acquire(&self) -> Slot<'_> {
        // UNREACHABLE: The semaphore is owned by self and never closed.
        let permit = self.semaphore.acquire().await.unreachable();
        trace!(running = self.running(), limit = self.limit, "acquired concurrency slot");

        Slot {
            _permit: permit,
            owner: self,
        }
    }

    /// Runs `future` to completion while holding a slot.
    pub async fn run<F: Future>(&self, future: F) -> F::Output {
        let _slot = self.acquire().await;
        future.await
    }
}

impl Debug for ConcurrencyLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrencyLimit")
            .field("limit", &self.limit)
            .field("running", &self.running())
            .finish()
    }
}

/// A held concurrency slot. Dropping it releases the slot to the longest waiting caller.
#[must_use = "the slot is released as soon as it is dropped"]
pub struct Slot<'a> {
    _permit: SemaphorePermit<'a>,
    owner: &'a ConcurrencyLimit,
}

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        // The permit is returned after this runs, so this slot is still counted.
        trace!(
            running = self.owner.running().saturating_sub(1),
            limit = self.owner.limit,
            "released concurrency slot"
        );
    }
}

impl Debug for Slot<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").finish_non_exhaustive()
    }
}

/// An async function which can be invoked with the argument tuple `Args`. Implemented for closures
/// and functions of up to four arguments that return a [`Future`].
pub trait Task<Args> {
    type Output;

    type Future: Future<Output = Self::Output>;

    fn invoke(&self, args: Args) -> Self::Future;
}

macro_rules! impl_task {
    ($($arg:ident),*) => {
        impl<Func, Fut, $($arg),*> Task<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Fut,
            Fut: Future,
        {
            type Output = Fut::Output;

            type Future = Fut;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Fut {
                self($($arg),*)
            }
        }
    };
}

impl_task!();
impl_task!(A);
impl_task!(A, B);
impl_task!(A, B, C);
impl_task!(A, B, C, D);

/// An async function wrapped by [`limit_concurrency`]. Clones share the same [`ConcurrencyLimit`],
/// so the limit applies across every caller.
pub struct LimitedFn<F> {
    func: F,
    limit: Arc<ConcurrencyLimit>,
}

impl<F> LimitedFn<F> {
    /// Invokes the wrapped function with `args` once a slot is free, holding the slot until the
    /// returned future settles. Whatever the function produces, including errors, is returned as
    /// is.
    pub async fn call<Args>(&self, args: Args) -> <F as Task<Args>>::Output
    where
        F: Task<Args>,
    {
        let _slot = self.limit.acquire().await;
        self.func.invoke(args).await
    }

    /// Returns the limit shared by this function and its clones.
    pub fn limit(&self) -> &ConcurrencyLimit {
        &self.limit
    }
}

impl<F: Clone> Clone for LimitedFn<F> {
    fn clone(&self) -> Self {
        LimitedFn {
            func: self.func.clone(),
            limit: Arc::clone(&self.limit),
        }
    }
}

impl<F> Debug for LimitedFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimitedFn")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Wraps `func` so that at most `limit` invocations of it are in flight at once. Invocations past
/// the limit wait for a slot, first come first served.
///
/// # Examples
/// ```
/// # use std::num::NonZeroUsize;
/// # use utility_lib::concurrent::limit_concurrency;
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let double = limit_concurrency(|n: u32| async move { n * 2 }, NonZeroUsize::MIN);
/// assert_eq!(double.call((21,)).await, 42);
/// assert_eq!(double.limit().running(), 0);
/// # });
/// ```
pub fn limit_concurrency<F>(func: F, limit: NonZeroUsize) -> LimitedFn<F> {
    LimitedFn {
        func,
        limit: Arc::new(ConcurrencyLimit::new(limit)),
    }
}
