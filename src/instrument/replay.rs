//! Replay of recorded call history

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::cache::Cache;
use crate::error::Result;
use crate::instrument::{inputs_key, invocation_count, outputs_key, Operation};
use crate::store::StoreClient;

// == Recorded Call ==
/// One recorded invocation, as stringified at call time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedCall {
    pub input: String,
    pub output: String,
}

// == Replay ==
/// Invocation history of one operation, read back from the store.
///
/// Displays as a header line followed by one line per recorded call:
///
/// ```text
/// Cache.store was called 2 times:
/// Cache.store(*foo) -> 1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed
/// Cache.store(*42) -> 6ec0bd7f-11c0-43da-975e-2a8ad9ebae0b
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    /// Operation identifier
    pub name: String,
    /// Value of the invocation counter (0 when never called)
    pub count: i64,
    /// Recorded calls, oldest first
    pub calls: Vec<RecordedCall>,
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called {} times:", self.name, self.count)?;
        for call in &self.calls {
            write!(f, "\n{}(*{}) -> {}", self.name, call.input, call.output)?;
        }
        Ok(())
    }
}

/// Reads the counter and history lists recorded for `op`.
///
/// Never fails on missing data: an operation that was never called yields a
/// zero count and no calls. A history write cut short between the two
/// appends leaves a trailing input without output; that input is dropped.
pub fn replay<S, O>(cache: &mut Cache<S>, op: &O) -> Result<Replay>
where
    S: StoreClient,
    O: Operation<S>,
{
    let name = op.qualified_name();
    let client = cache.client_mut();

    let count = invocation_count(client, name)?;
    let inputs = client.lrange(&inputs_key(name), 0, -1)?;
    let outputs = client.lrange(&outputs_key(name), 0, -1)?;

    if inputs.len() != outputs.len() {
        warn!(
            operation = name,
            inputs = inputs.len(),
            outputs = outputs.len(),
            "Call history lists are out of step"
        );
    }

    let calls = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| RecordedCall {
            input: String::from_utf8_lossy(&input).into_owned(),
            output: String::from_utf8_lossy(&output).into_owned(),
        })
        .collect();

    Ok(Replay {
        name: name.to_string(),
        count,
        calls,
    })
}

/// Writes the replay report for `op` to `out`, one line per row.
pub fn write_replay<S, O, W>(cache: &mut Cache<S>, op: &O, out: &mut W) -> Result<Replay>
where
    S: StoreClient,
    O: Operation<S>,
    W: Write,
{
    let report = replay(cache, op)?;
    writeln!(out, "{}", report)?;
    Ok(report)
}

/// Prints the replay report for `op` to stdout.
pub fn print_replay<S, O>(cache: &mut Cache<S>, op: &O) -> Result<()>
where
    S: StoreClient,
    O: Operation<S>,
{
    write_replay(cache, op, &mut io::stdout().lock()).map(|_| ())
}
