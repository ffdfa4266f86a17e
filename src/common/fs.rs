use std::{fs, io::Read, path::Path};

use flate2::read::GzDecoder;

use crate::error::LoadError;

/// Error unless a regular file exists at `path`.
pub(crate) fn require_file_exists(path: &Path) -> Result<(), LoadError> {
    if !path.is_file() {
        return Err(LoadError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        });
    }
    Ok(())
}

/// Read the whole file, gunzipping it first when the name ends in `.gz`.
pub(crate) fn read_input_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    require_file_exists(path)?;
    let io_error = |source| LoadError::Io { path: path.to_path_buf(), source };

    let raw = fs::read(path).map_err(io_error)?;
    if !is_gzipped(path) { return Ok(raw) }

    let mut decoded = Vec::new();
    GzDecoder::new(&raw[..]).read_to_end(&mut decoded).map_err(io_error)?;
    Ok(decoded)
}

/// Lowercased extension of `path`, looking through a trailing `.gz`.
pub(crate) fn data_extension(path: &Path) -> Option<String> {
    let path = if is_gzipped(path) { Path::new(path.file_stem()?) } else { path };
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    #[test]
    fn extension_looks_through_gz() {
        assert_eq!(data_extension(Path::new("data/result.csv.gz")).as_deref(), Some("csv"));
        assert_eq!(data_extension(Path::new("result.GeoJSON")).as_deref(), Some("geojson"));
        assert_eq!(data_extension(Path::new("result")), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_input_bytes(Path::new("/definitely/not/here.geojson"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn gzipped_input_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parcels.csv.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"ParcelID\n1\n").unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        assert_eq!(read_input_bytes(&path).unwrap(), b"ParcelID\n1\n");
    }
}
