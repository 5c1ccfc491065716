// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised before a record reaches the store. Store-level failures are
/// reported through `anyhow` with context at the call site.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("unknown branch '{0}'")]
    UnknownBranch(String),
    #[error("unknown payment status '{0}' (use any|paid|unpaid)")]
    UnknownStatus(String),
}
