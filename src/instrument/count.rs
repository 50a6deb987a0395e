//! Invocation counting wrapper

use tracing::debug;

use crate::cache::Cache;
use crate::error::Result;
use crate::instrument::Operation;
use crate::store::StoreClient;

// == Count Calls ==
/// Counts successful invocations of the wrapped operation.
///
/// The counter is incremented after the inner call returns `Ok`; a failed
/// call leaves it unchanged.
#[derive(Debug, Clone, Copy)]
pub struct CountCalls<O> {
    inner: O,
}

impl<O> CountCalls<O> {
    pub const fn new(inner: O) -> Self {
        Self { inner }
    }

    /// Returns the wrapped operation.
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<S: StoreClient, O: Operation<S>> Operation<S> for CountCalls<O> {
    type Input = O::Input;
    type Output = O::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    fn invoke(&self, cache: &mut Cache<S>, input: Self::Input) -> Result<Self::Output> {
        let output = self.inner.invoke(cache, input)?;

        let name = self.inner.qualified_name();
        let count = cache.client_mut().incr(name)?;
        debug!(operation = name, count, "Counted call");

        Ok(output)
    }
}
