// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::io;

use crate::{PointId, RouteId};

/// Which of the two tabular sources is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Points,
    Routes,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => f.write_str("points"),
            Self::Routes => f.write_str("routes"),
        }
    }
}

/// Broad classification of a [LoadErrorKind].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The source couldn't be opened or read.
    Io,

    /// The source doesn't follow the expected layout:
    /// invalid UTF-8, wrong header, missing records or fields, malformed numbers.
    Schema,

    /// An identifier or a name doesn't satisfy its predicate.
    Validity,

    /// Duplicate identifiers or references to unknown points.
    Integrity,
}

/// Reason why a source was rejected.
#[derive(Debug, thiserror::Error)]
pub enum LoadErrorKind {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing header, expected {expected:?}")]
    MissingHeader { expected: &'static str },

    #[error("header: got {got:?}, expected {expected:?}")]
    UnexpectedHeader { got: String, expected: &'static str },

    #[error("no records after the header")]
    MissingRecord,

    #[error("got {got} fields, expected {expected}")]
    FieldCount { got: usize, expected: usize },

    #[error("invalid point id: {0:?}")]
    InvalidPointId(String),

    #[error("invalid route id: {0:?}")]
    InvalidRouteId(String),

    #[error("name too short: {0:?}")]
    NameTooShort(String),

    #[error("{field}: not a number: {got:?}")]
    InvalidNumber { field: &'static str, got: String },

    #[error("negative route length: {0}")]
    NegativeLength(f64),

    #[error("duplicate point: {0}")]
    DuplicatePoint(PointId),

    #[error("duplicate route: {0}")]
    DuplicateRoute(RouteId),

    #[error("route endpoint references an unknown point: {0}")]
    UnknownEndpoint(PointId),
}

impl LoadErrorKind {
    pub fn category(&self) -> Category {
        match self {
            Self::Io(_) => Category::Io,
            Self::Csv(e) if e.is_io_error() => Category::Io,

            Self::Csv(_)
            | Self::MissingHeader { .. }
            | Self::UnexpectedHeader { .. }
            | Self::MissingRecord
            | Self::FieldCount { .. }
            | Self::InvalidNumber { .. }
            | Self::NegativeLength(_) => Category::Schema,

            Self::InvalidPointId(_) | Self::InvalidRouteId(_) | Self::NameTooShort(_) => {
                Category::Validity
            }

            Self::DuplicatePoint(_) | Self::DuplicateRoute(_) | Self::UnknownEndpoint(_) => {
                Category::Integrity
            }
        }
    }
}

/// Error which can occur when loading a [Map](crate::Map).
///
/// `line` is 1-based, with the header being line 1.
/// Zero is used for errors which aren't tied to any line, like failing to open a file.
#[derive(Debug, thiserror::Error)]
#[error("{input} source, line {line}: {kind}")]
pub struct LoadError {
    pub input: Input,
    pub line: usize,
    pub kind: LoadErrorKind,
}

impl LoadError {
    pub(super) fn new(input: Input, line: usize, kind: LoadErrorKind) -> Self {
        Self { input, line, kind }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
}
