//! Route data loading for route-ranker
//!
//! Reads the comma-separated route file and validates it into
//! [`RouteRecord`]s. The file format is one `route_number, happy_ratio`
//! pair per line with no header, comments or blank lines.
//!
//! The loader reports problems as [`Error`] values and never ends the
//! process itself; the caller decides what a failed load means for the run.

use std::collections::HashSet;
use std::path::Path;

use log::{debug, warn};

use crate::core::error::{Error, Result};
use crate::core::route::RouteRecord;

/// Read and validate the route file at `path`
///
/// # Errors
///
/// Returns a file access error if the path is missing, unreadable or a
/// directory, and a format or duplicate error if the contents are invalid.
pub fn load_routes(path: impl AsRef<Path>) -> Result<Vec<RouteRecord>> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path).map_err(|e| Error::from_read(path, e))?;
    if metadata.is_dir() {
        return Err(Error::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
    if contents.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let records = parse_routes(&contents)?;
    debug!("Loaded {} routes from {}", records.len(), path.display());
    Ok(records)
}

/// Parse route records from file contents, in file order
///
/// Empty input yields an empty collection; [`load_routes`] rejects empty
/// files before calling this.
///
/// # Errors
///
/// Returns the first malformed line, or [`Error::DuplicateRoute`] once every
/// line has parsed.
pub fn parse_routes(contents: &str) -> Result<Vec<RouteRecord>> {
    let mut records = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        records.push(parse_line(index + 1, raw)?);
    }

    check_unique(&records)?;

    for record in &records {
        if record.route_number <= 0 {
            warn!("Route number {} is not positive", record.route_number);
        }
        if record.happy_ratio < 0.0 {
            warn!(
                "Route {} has a negative happy ratio ({})",
                record.route_number, record.happy_ratio
            );
        }
    }

    Ok(records)
}

/// Parse one `route_number, happy_ratio` line
fn parse_line(line: usize, raw: &str) -> Result<RouteRecord> {
    let fields: Vec<&str> = raw.trim().split(',').collect();
    if fields.len() != 2 {
        return Err(Error::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let route_text = fields[0].trim();
    let route_number = route_text
        .parse::<i64>()
        .map_err(|source| Error::InvalidRouteNumber {
            line,
            value: route_text.to_string(),
            source,
        })?;

    let ratio_text = fields[1].trim();
    let happy_ratio = ratio_text
        .parse::<f64>()
        .map_err(|source| Error::InvalidHappyRatio {
            line,
            value: ratio_text.to_string(),
            source,
        })?;

    Ok(RouteRecord::new(route_number, happy_ratio))
}

/// Reject the dataset if any route number repeats
fn check_unique(records: &[RouteRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        let number = record.route_number;
        if !seen.insert(number) && reported.insert(number) {
            duplicates.push(number);
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(Error::DuplicateRoute { routes: duplicates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCategory;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn write_routes(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_routes_in_file_order() {
        let file = write_routes("101, 2.0\n102, 0.5\n103, 1.0\n104, 0.0\n");
        let records = load_routes(file.path()).unwrap();

        assert_eq!(
            records,
            vec![
                RouteRecord::new(101, 2.0),
                RouteRecord::new(102, 0.5),
                RouteRecord::new(103, 1.0),
                RouteRecord::new(104, 0.0),
            ]
        );
    }

    #[test]
    fn test_load_routes_without_trailing_newline() {
        let file = write_routes("7,3.5\r\n8,4");
        let records = load_routes(file.path()).unwrap();
        assert_eq!(records, vec![RouteRecord::new(7, 3.5), RouteRecord::new(8, 4.0)]);
    }

    #[test]
    fn test_empty_file_is_format_error() {
        let file = write_routes("");
        let err = load_routes(file.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyFile { .. }));
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_routes(dir.path().join("routes.txt")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(err.category(), ErrorCategory::FileAccess);
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let err = load_routes(dir.path()).unwrap_err();
        assert!(matches!(err, Error::IsDirectory { .. }));
        assert_eq!(err.category(), ErrorCategory::FileAccess);
    }

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x31, 0x2c, 0xff, 0xfe, 0x0a]).unwrap();
        let err = load_routes(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding { .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_routes("1,2.0\n3,4.0,5\n").unwrap_err();
        match err {
            Error::FieldCount { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("Expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_fails_field_count() {
        let err = parse_routes("1,2.0\n\n3,4.0\n").unwrap_err();
        assert!(matches!(err, Error::FieldCount { line: 2, found: 1 }));
    }

    #[test]
    fn test_unparseable_fields() {
        let err = parse_routes("abc, 2.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRouteNumber { line: 1, .. }));

        let err = parse_routes("1.5, 2.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRouteNumber { .. }));

        let err = parse_routes("12, high\n").unwrap_err();
        match err {
            Error::InvalidHappyRatio { line, value, .. } => {
                assert_eq!(line, 1);
                assert_eq!(value, "high");
            }
            other => panic!("Expected InvalidHappyRatio, got {other:?}"),
        }
    }

    #[test]
    fn test_first_bad_line_wins() {
        let err = parse_routes("1,x\n2,3,4\n").unwrap_err();
        assert!(matches!(err, Error::InvalidHappyRatio { line: 1, .. }));
    }

    #[test]
    fn test_duplicate_routes_rejected() {
        let err = parse_routes("12,3.0\n12,5.0\n").unwrap_err();
        match err {
            Error::DuplicateRoute { routes } => assert_eq!(routes, vec![12]),
            other => panic!("Expected DuplicateRoute, got {other:?}"),
        }
    }

    #[test]
    fn test_each_duplicate_reported_once() {
        let err = parse_routes("5,1\n6,1\n5,2\n6,2\n5,3\n").unwrap_err();
        match err {
            Error::DuplicateRoute { routes } => assert_eq!(routes, vec![5, 6]),
            other => panic!("Expected DuplicateRoute, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_route_numbers_are_accepted() {
        let records = parse_routes("0,1.5\n-4,2.5\n+9,3\n").unwrap();
        let numbers: Vec<i64> = records.iter().map(|r| r.route_number).collect();
        assert_eq!(numbers, vec![0, -4, 9]);
    }
}
