//! Call history wrapper

use tracing::debug;

use crate::cache::Cache;
use crate::error::Result;
use crate::instrument::{inputs_key, outputs_key, Operation};
use crate::store::StoreClient;

// == Call History ==
/// Records the inputs and outputs of the wrapped operation.
///
/// The input is stringified before the inner call consumes it. Both entries
/// are appended only once the call returns `Ok`, so a failed call records
/// nothing and `inputs[i]` always belongs to `outputs[i]`.
#[derive(Debug, Clone, Copy)]
pub struct CallHistory<O> {
    inner: O,
}

impl<O> CallHistory<O> {
    pub const fn new(inner: O) -> Self {
        Self { inner }
    }

    /// Returns the wrapped operation.
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<S: StoreClient, O: Operation<S>> Operation<S> for CallHistory<O> {
    type Input = O::Input;
    type Output = O::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    fn invoke(&self, cache: &mut Cache<S>, input: Self::Input) -> Result<Self::Output> {
        let name = self.inner.qualified_name();
        let recorded_input = input.to_string();

        let output = self.inner.invoke(cache, input)?;

        let client = cache.client_mut();
        client.rpush(&inputs_key(name), &recorded_input)?;
        let recorded = client.rpush(&outputs_key(name), &output.to_string())?;
        debug!(operation = name, recorded, "Recorded call history");

        Ok(output)
    }
}
