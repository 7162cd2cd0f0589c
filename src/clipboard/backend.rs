//! Backend selection and the copy strategy chain.
//!
//! A backend is an ordered list of copy strategies. Strategies are tried in
//! sequence and the first success short-circuits; the failure of the last
//! strategy is the failure of the whole chain.

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardError {
    SystemUnavailable,
    WriteError,
}

type CopyStrategy = fn(&str) -> ClipboardResult;

fn strategies(backend: ClipboardBackend) -> &'static [CopyStrategy] {
    match backend {
        ClipboardBackend::System => &[system::copy],
        ClipboardBackend::Osc52 => &[osc52::copy],
        ClipboardBackend::Auto => &[system::copy, osc52::copy],
    }
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    run_strategies(text, strategies(backend))
}

fn run_strategies<F>(text: &str, strategies: &[F]) -> ClipboardResult
where
    F: Fn(&str) -> ClipboardResult,
{
    let mut last_error = ClipboardError::SystemUnavailable;

    for strategy in strategies {
        match strategy(text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = e,
        }
    }

    Err(last_error)
}
