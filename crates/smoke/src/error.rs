// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::selector::SelectorError;
use shopqa_capture::UnexpectedConsoleOutput;
use thiserror::Error;

/// Why a smoke test failed
#[derive(Debug, Error)]
pub enum SmokeFailure {
    #[error(transparent)]
    Console(#[from] UnexpectedConsoleOutput),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("no element matches selector '{selector}'")]
    ElementNotFound { selector: String },

    #[error("expected {expected} element(s) matching '{selector}', found {actual}")]
    ElementCount {
        selector: String,
        expected: usize,
        actual: usize,
    },

    #[error("element matching '{selector}' is a <{tag}>, not an input")]
    NotAnInput { selector: String, tag: String },
}
