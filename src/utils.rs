use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    config::DomConfig,
    dom::Document,
    error::{Error, ErrorKind, Result},
};

/// Command-line flag that makes a test binary write its report
pub const OUTPUT_FLAG: &str = "--gtest_output";

/// Report file name used when the flag names only a directory
pub const DEFAULT_OUTPUT_FILE: &str = "test_detail.xml";

/// Flag asking a test binary for an XML report at `path`,
/// e.g. `--gtest_output=xml:/tmp/out.xml`
pub fn output_flag(path: impl AsRef<Path>) -> String {
    format!("{OUTPUT_FLAG}=xml:{}", path.as_ref().display())
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "Cannot read file {}: {e}",
            path.display()
        )))
    })
}

/// Read and build the report tree stored at `path`
#[instrument]
pub fn load_document(path: &Path) -> Result<Document> {
    load_document_with_config(path, DomConfig::default())
}

pub fn load_document_with_config(path: &Path, config: DomConfig) -> Result<Document> {
    let content = read_file(path)?;
    debug!(bytes = content.len(), "file read, building tree");
    Document::parse_with_config(&content, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_flag() {
        assert_eq!(
            output_flag("/tmp/reports/out.xml"),
            "--gtest_output=xml:/tmp/reports/out.xml"
        );
        assert_eq!(
            output_flag(DEFAULT_OUTPUT_FILE),
            "--gtest_output=xml:test_detail.xml"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/definitely/not/here.xml"));
        assert!(matches!(
            err.as_ref().map_err(|e| e.kind()),
            Err(ErrorKind::Io(_))
        ));
    }
}
