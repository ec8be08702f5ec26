// ============================================================================
// Batch Processing
// Multi-case text input, evaluated in order, one product per output line
// ============================================================================

//! Batch layer over [`RadixMultiplier`].
//!
//! Input is a case count `T` followed by `T` groups of three lines:
//!
//! ```text
//! 2
//! 16
//! FF
//! FF
//! 10
//! 1.5
//! 2
//! ```
//!
//! Output is one line per case, in input order. A case whose operands do not
//! parse is rendered as `ERROR: <message>` and the rest of the batch still runs.

use crate::engine::RadixMultiplier;
use crate::numeric::NumericResult;
use std::fmt;
use std::io;
use std::panic;

/// One multiplication read from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCase {
    pub base: u32,
    pub lhs: String,
    pub rhs: String,
}

impl BatchCase {
    pub fn new(base: u32, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            base,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that abort a whole batch
#[derive(Debug)]
pub enum BatchError {
    /// Input could not be read
    Io(io::Error),
    /// A count or base line is not a decimal number (1-based line number)
    InvalidLine { line: usize, content: String },
    /// Input ended before the announced number of cases
    CaseCountMismatch { expected: usize, found: usize },
}

impl BatchError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            BatchError::Io(_) => 1,
            BatchError::InvalidLine { .. } | BatchError::CaseCountMismatch { .. } => 2,
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Io(e) => write!(f, "Failed to read input: {}", e),
            BatchError::InvalidLine { line, content } => {
                write!(f, "Line {}: expected a decimal number, found {:?}", line, content)
            }
            BatchError::CaseCountMismatch { expected, found } => {
                write!(f, "Expected {} cases, input holds {}", expected, found)
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BatchError {
    fn from(e: io::Error) -> Self {
        BatchError::Io(e)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse the case count and every case that follows it
///
/// Lines are trimmed, so CRLF input and stray spaces are accepted.
/// Lines after the last announced case are ignored.
pub fn parse_cases(input: &str) -> Result<Vec<BatchCase>, BatchError> {
    let mut lines = input.lines().map(str::trim).enumerate();

    let expected: usize = parse_number(lines.next().unwrap_or((0, "")))?;
    // The announced count is untrusted; never reserve more than the input can hold
    let mut cases = Vec::with_capacity(expected.min(input.lines().count() / 3));

    for found in 0..expected {
        let mismatch = || BatchError::CaseCountMismatch { expected, found };

        let base = parse_number(lines.next().ok_or_else(mismatch)?)?;
        let (_, lhs) = lines.next().ok_or_else(mismatch)?;
        let (_, rhs) = lines.next().ok_or_else(mismatch)?;
        cases.push(BatchCase::new(base, lhs, rhs));
    }

    tracing::debug!(cases = cases.len(), "batch parsed");
    Ok(cases)
}

fn parse_number<T: std::str::FromStr>((index, text): (usize, &str)) -> Result<T, BatchError> {
    text.parse().map_err(|_| BatchError::InvalidLine {
        line: index + 1,
        content: text.to_string(),
    })
}

// ============================================================================
// Evaluation
// ============================================================================

/// Multiply every case, spreading contiguous chunks over `workers` threads
///
/// Results are in the same order as `cases`. With `workers <= 1` everything
/// runs on the calling thread.
pub fn evaluate(
    multiplier: &RadixMultiplier,
    cases: &[BatchCase],
    workers: usize,
) -> Vec<NumericResult<String>> {
    let run_case = |case: &BatchCase| multiplier.multiply(case.base, &case.lhs, &case.rhs);

    if workers <= 1 || cases.len() <= 1 {
        return cases.iter().map(run_case).collect();
    }

    let chunk_size = cases.len().div_ceil(workers);
    tracing::debug!(cases = cases.len(), workers, chunk_size, "evaluating batch in parallel");

    let outcome = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = cases
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move |_| chunk.iter().map(run_case).collect::<Vec<_>>()))
            .collect();

        let mut results = Vec::with_capacity(cases.len());
        for handle in handles {
            match handle.join() {
                Ok(chunk) => results.extend(chunk),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        results
    });

    match outcome {
        Ok(results) => results,
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// One line per result, each terminated by a newline
pub fn render(results: &[NumericResult<String>]) -> String {
    let mut out = String::new();
    for result in results {
        match result {
            Ok(product) => out.push_str(product),
            Err(e) => {
                out.push_str("ERROR: ");
                out.push_str(&e.to_string());
            }
        }
        out.push('\n');
    }
    out
}

/// Parse, evaluate and render a whole batch
pub fn run(
    input: &str,
    multiplier: &RadixMultiplier,
    workers: usize,
) -> Result<String, BatchError> {
    let cases = parse_cases(input)?;
    let results = evaluate(multiplier, &cases, workers);

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = results.len(), "some cases were rejected");
    }

    Ok(render(&results))
}
