//! Common types and utilities shared across CLI commands.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flighttower::config::{config_file_path, ConfigFile};
use serde::Serialize;

use crate::error::CliError;

/// The config file in effect: the `--config` override or the default path.
pub fn config_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Load the config file in effect, falling back to defaults if it is absent.
pub fn load_config(override_path: Option<&Path>) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(&config_path(override_path))?)
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    write_json(&mut io::stdout().lock(), value)
}

/// Pretty-print `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_override() {
        let custom = Path::new("/tmp/custom.ini");
        assert_eq!(config_path(Some(custom)), PathBuf::from("/tmp/custom.ini"));
        assert_eq!(config_path(None), config_file_path());
    }

    /// Accepts `limit` bytes, then fails every write.
    struct ShortWriter {
        limit: usize,
        written: Vec<u8>,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"count": 0})).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"count\": 0\n}\n");
    }

    #[test]
    fn test_write_json_reports_failed_newline() {
        // Room for the JSON body but not the trailing newline
        let mut writer = ShortWriter {
            limit: "{\n  \"count\": 0\n}".len(),
            written: Vec::new(),
        };

        let result = write_json(&mut writer, &serde_json::json!({"count": 0}));
        assert!(matches!(result, Err(CliError::Output(_))));
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.ini");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config, ConfigFile::default());
    }
}
