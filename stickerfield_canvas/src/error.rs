// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failure to load sticker or cluster data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input was not valid JSON of the expected shape.
    #[error("malformed sticker data: {0}")]
    Json(#[from] serde_json::Error),
    /// A record parsed but cannot be placed on the canvas.
    #[error("sticker {index} is invalid: {reason}")]
    InvalidSticker {
        /// Position of the record in its list.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
}
