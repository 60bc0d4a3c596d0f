//! Plain-text storage format for linear systems.
//!
//! ```text
//! n
//! a[0][0] a[0][1] ... a[0][n-1] b[0]
//! ...
//! a[n-1][0] ... a[n-1][n-1] b[n-1]
//! ```
//!
//! Values are whitespace separated; line breaks carry no meaning to the reader.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::GaussCoreError;
use crate::linear_system::LinearSystem;
use crate::traits::Scalar;

/// Parses a system from any reader.
pub fn read_system<T: Scalar, R: Read>(mut reader: R) -> Result<LinearSystem<T>, GaussCoreError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_system(&content)
}

/// Parses a system from its textual representation.
pub fn parse_system<T: Scalar>(content: &str) -> Result<LinearSystem<T>, GaussCoreError> {
    let mut tokens = content.split_whitespace();

    let size_token = tokens
        .next()
        .ok_or_else(|| GaussCoreError::InvalidSize("missing size token".to_string()))?;
    let n: usize = size_token.parse().map_err(|_| {
        GaussCoreError::InvalidSize(format!(
            "expected a positive integer, found '{}'",
            size_token
        ))
    })?;
    if n == 0 {
        return Err(GaussCoreError::InvalidSize(
            "system size must be positive".to_string(),
        ));
    }
    log::debug!("Reading {}x{} augmented matrix", n, n + 1);

    let mut rows = Vec::new();
    for i in 0..n {
        let mut row = Vec::new();
        for j in 0..=n {
            let token = tokens.next().ok_or_else(|| GaussCoreError::InvalidElement {
                row: i,
                col: j,
                reason: "unexpected end of input".to_string(),
            })?;
            let value = token.parse::<T>().map_err(|_| GaussCoreError::InvalidElement {
                row: i,
                col: j,
                reason: format!("'{}' is not a number", token),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    LinearSystem::new(rows)
}

/// Loads a system from a file on disk.
pub fn load_system<T: Scalar>(path: impl AsRef<Path>) -> Result<LinearSystem<T>, GaussCoreError> {
    let path = path.as_ref();
    log::info!("Loading system from file: {}", path.display());
    let system = read_system(File::open(path)?)?;
    log::info!("System loaded: {}x{}", system.size(), system.size());
    Ok(system)
}

/// Writes a system using six decimal places per value.
pub fn write_system<T: Scalar, W: Write>(
    system: &LinearSystem<T>,
    mut writer: W,
) -> Result<(), GaussCoreError> {
    writeln!(writer, "{}", system.size())?;
    for row in system.rows() {
        for value in row {
            write!(writer, "{:.6} ", value)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves a system to a file on disk, replacing any existing file.
pub fn save_system<T: Scalar>(
    system: &LinearSystem<T>,
    path: impl AsRef<Path>,
) -> Result<(), GaussCoreError> {
    let file = File::create(path.as_ref())?;
    write_system(system, BufWriter::new(file))
}
