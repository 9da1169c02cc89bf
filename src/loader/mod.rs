// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Reading a [Map] out of two `;`-separated text sources.
//!
//! The points source must look like:
//!
//! ```text
//! ID;Nome;Latitude;Longitude
//! #A;Some Place;-23.55;-46.63
//! ```
//!
//! and the routes source like:
//!
//! ```text
//! ID;Nome;Extremidade 1;Extremidade 2;Comprimento
//! &R1;Some Road;#A;#B;12.5
//! ```
//!
//! Loading is all-or-nothing: any invalid record rejects both sources.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use builder::MapBuilder;

use crate::Map;

mod builder;
mod error;
mod records;

pub use error::{Category, Input, LoadError, LoadErrorKind};

/// Compression of the input sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Guess the compression based on the first bytes of each source.
    #[default]
    Detect,

    /// Force uncompressed text.
    Plain,

    /// Force [gzip](https://en.wikipedia.org/wiki/Gzip) compression.
    Gzip,

    /// Force [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression.
    Bzip2,
}

/// Additional controls for reading a [Map].
#[derive(Debug, Default, Clone)]
pub struct Options {
    /// Compression applied to both sources.
    pub compression: Compression,
}

/// Read a [Map] from points and routes files at the provided paths.
///
/// The routes file is only opened after all points have been read.
pub fn read_from_files<P: AsRef<Path>, R: AsRef<Path>>(
    options: &Options,
    points_path: P,
    routes_path: R,
) -> Result<Map, LoadError> {
    log_result(read_files(options, points_path.as_ref(), routes_path.as_ref()))
}

/// Read a [Map] from two readers.
///
/// The provided streams will be automatically wrapped in buffered readers.
pub fn read_from_io<P: io::Read, R: io::Read>(
    options: &Options,
    points: P,
    routes: R,
) -> Result<Map, LoadError> {
    log_result(read(options, points, routes))
}

/// Read a [Map] from two in-memory buffers.
pub fn read_from_buffer(
    options: &Options,
    points: &[u8],
    routes: &[u8],
) -> Result<Map, LoadError> {
    read_from_io(options, points, routes)
}

fn read_files(
    options: &Options,
    points_path: &Path,
    routes_path: &Path,
) -> Result<Map, LoadError> {
    let mut b = MapBuilder::default();

    // Each file is closed as soon as its records are consumed
    {
        let f =
            File::open(points_path).map_err(|e| LoadError::new(Input::Points, 0, e.into()))?;
        b.add_points(decompress(options.compression, f, Input::Points)?)?;
    }

    {
        let f =
            File::open(routes_path).map_err(|e| LoadError::new(Input::Routes, 0, e.into()))?;
        b.add_routes(decompress(options.compression, f, Input::Routes)?)?;
    }

    Ok(b.finish())
}

fn read<P: io::Read, R: io::Read>(
    options: &Options,
    points: P,
    routes: R,
) -> Result<Map, LoadError> {
    let mut b = MapBuilder::default();
    b.add_points(decompress(options.compression, points, Input::Points)?)?;
    b.add_routes(decompress(options.compression, routes, Input::Routes)?)?;
    Ok(b.finish())
}

fn log_result(result: Result<Map, LoadError>) -> Result<Map, LoadError> {
    match &result {
        Ok(m) => log::info!(
            "loaded {} points and {} routes",
            m.point_count(),
            m.route_count()
        ),
        Err(e) => log::warn!("failed to load map: {}", e),
    }
    result
}

/// Wraps a reader in a buffered decompressor, as per `compression`.
fn decompress<'a, R: io::Read + 'a>(
    compression: Compression,
    reader: R,
    input: Input,
) -> Result<Box<dyn BufRead + 'a>, LoadError> {
    let mut b = io::BufReader::new(reader);

    let compression = match compression {
        Compression::Detect => {
            let head = b
                .fill_buf()
                .map_err(|e| LoadError::new(input, 0, e.into()))?;
            detect(head)
        }
        c => c,
    };

    Ok(match compression {
        Compression::Detect | Compression::Plain => Box::new(b),
        Compression::Gzip => Box::new(io::BufReader::new(flate2::read::MultiGzDecoder::new(b))),
        Compression::Bzip2 => Box::new(io::BufReader::new(bzip2::read::MultiBzDecoder::new(b))),
    })
}

fn detect(head: &[u8]) -> Compression {
    if head.starts_with(&[0x1f, 0x8b]) {
        Compression::Gzip
    } else if head.starts_with(b"BZh") {
        Compression::Bzip2
    } else {
        Compression::Plain
    }
}
