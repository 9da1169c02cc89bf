use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use geoplan::loader::{Compression, Options};
use geoplan::{report, Map, PointId};

#[derive(Debug, thiserror::Error)]
#[error("{0} + {1}: {2}")]
struct MapLoadError(PathBuf, PathBuf, #[source] geoplan::LoadError);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    Detect,
    Plain,
    Gzip,
    Bzip2,
}

impl From<CompressionArg> for Compression {
    fn from(c: CompressionArg) -> Self {
        match c {
            CompressionArg::Detect => Compression::Detect,
            CompressionArg::Plain => Compression::Plain,
            CompressionArg::Gzip => Compression::Gzip,
            CompressionArg::Bzip2 => Compression::Bzip2,
        }
    }
}

#[derive(Parser)]
struct Cli {
    /// The path to the points file
    points_file: PathBuf,

    /// The path to the routes file
    routes_file: PathBuf,

    /// Id of the start point, e.g. "#A"
    #[arg(requires = "destination")]
    origin: Option<String>,

    /// Id of the end point, e.g. "#B"
    destination: Option<String>,

    /// Print all loaded points and routes
    #[arg(short, long)]
    list: bool,

    /// Compression of the input files
    #[arg(short, long, value_enum, default_value_t = CompressionArg::Detect)]
    compression: CompressionArg,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let options = Options {
        compression: cli.compression.into(),
    };
    let map = load_map(&options, &cli.points_file, &cli.routes_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        writeln!(out, "POINTS:")?;
        report::write_points(&map, &mut out)?;
        writeln!(out, "ROUTES:")?;
        report::write_routes(&map, &mut out)?;
    }

    if let (Some(origin), Some(destination)) = (cli.origin, cli.destination) {
        let found = map.find_path(&PointId::new(origin), &PointId::new(destination))?;
        report::write_path(&map, &found, &mut out)?;
    }

    Ok(())
}

fn load_map(options: &Options, points: &Path, routes: &Path) -> Result<Map, MapLoadError> {
    let mut map = Map::new();
    match map.load_with_options(options, points, routes) {
        Ok(()) => Ok(map),
        Err(e) => Err(MapLoadError(points.to_path_buf(), routes.to_path_buf(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_flag() {
        let cli = Cli::try_parse_from(["geoplan", "p.csv", "r.csv", "--compression", "plain"])
            .unwrap();
        assert_eq!(Compression::from(cli.compression), Compression::Plain);

        let cli = Cli::try_parse_from(["geoplan", "p.csv", "r.csv"]).unwrap();
        assert_eq!(Compression::from(cli.compression), Compression::Detect);

        let args = ["geoplan", "p.csv", "r.csv", "--compression", "none"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
