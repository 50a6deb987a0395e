//! Call Instrumentation Module
//!
//! Wrapper operations that record how often an operation ran and what it was
//! called with, keeping that record in the store next to the cached data.
//!
//! # Store layout
//! For an operation identified as `<name>`:
//! - `<name>` holds the invocation count (INCR)
//! - `<name>:inputs` lists the stringified inputs (RPUSH)
//! - `<name>:outputs` lists the stringified outputs (RPUSH)
//!
//! History entries are written only after the wrapped call succeeds, so a
//! failed call leaves no trace. Counting and history are still separate round
//! trips with no transaction around them: a store failure between them leaves
//! the count and the list lengths out of step.

mod count;
mod history;
mod replay;

pub use count::CountCalls;
pub use history::CallHistory;
pub use replay::{print_replay, replay, write_replay, RecordedCall, Replay};

use std::fmt;

use crate::cache::{decode_integer, Cache};
use crate::error::Result;
use crate::store::StoreClient;

// == Operation ==
/// A named call against a cache that can be wrapped by instrumentation.
///
/// Wrappers implement this trait themselves and report the identifier of the
/// operation they wrap, so nesting them keeps a single identity.
pub trait Operation<S: StoreClient> {
    /// Argument of the call; its `Display` form is what history records.
    ///
    /// Operations take exactly one argument, recorded bare: `store("foo")`
    /// replays as `Cache.store(*foo)`, not as a rendered argument tuple.
    type Input: fmt::Display;
    /// Result of the call; its `Display` form is what history records.
    type Output: fmt::Display;

    /// Stable identifier used as the counter and history key prefix.
    fn qualified_name(&self) -> &str;

    /// Runs the operation against `cache`.
    fn invoke(&self, cache: &mut Cache<S>, input: Self::Input) -> Result<Self::Output>;
}

/// Key of the list holding recorded inputs for `name`.
pub fn inputs_key(name: &str) -> String {
    format!("{}:inputs", name)
}

/// Key of the list holding recorded outputs for `name`.
pub fn outputs_key(name: &str) -> String {
    format!("{}:outputs", name)
}

/// Reads the invocation counter for `name`; a missing counter reads as 0.
pub fn invocation_count<S: StoreClient>(client: &mut S, name: &str) -> Result<i64> {
    client.get(name)?.map(decode_integer).transpose().map(|c| c.unwrap_or(0))
}
