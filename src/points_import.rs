use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tour_search::graph::{Point, PointSet};

/// Failure to turn a file into a point set.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid record on line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("cannot read points: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads `name,x,y` records, one per line and without a header, in file order.
pub fn import_points<P: AsRef<Path>>(filename: P) -> Result<PointSet, ImportError> {
    let path = filename.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_points(BufReader::new(file))
}

pub fn read_points<R: std::io::Read>(reader: R) -> Result<PointSet, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = vec![];
    for record in reader.deserialize::<Point>() {
        match record {
            Ok(point) => points.push(point),
            Err(source) => {
                return Err(match source.position() {
                    Some(pos) => ImportError::Record {
                        line: pos.line(),
                        source,
                    },
                    None => ImportError::Csv(source),
                })
            }
        }
    }
    Ok(PointSet::new(points))
}

#[cfg(test)]
mod test_import {
    use super::*;

    #[test]
    fn test_read_points() {
        let input = "A,0,0\nB, 0.0 ,3\nC,4,-0.5\n";
        let points = read_points(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.iter().next(), Some(&Point::new("A", 0.0, 0.0)));
        assert_eq!(points.iter().nth(1), Some(&Point::new("B", 0.0, 3.0)));
        assert_eq!(points.iter().nth(2), Some(&Point::new("C", 4.0, -0.5)));
    }

    #[test]
    fn test_empty_input() {
        assert!(read_points("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_bad_coordinate() {
        let input = "A,0,0\nB,north,3\n";
        match read_points(input.as_bytes()) {
            Err(ImportError::Record { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a record error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field() {
        assert!(read_points("A,0,0\nB,1\n".as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("salesman-no-such-file.csv");
        assert!(matches!(
            import_points(&path),
            Err(ImportError::Open { .. })
        ));
    }
}
