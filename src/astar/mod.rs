// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod error;
mod search;

pub use error::AStarError;
pub use search::{find_path, PathFound, Step};
