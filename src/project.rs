//! Project naming and layout files on disk.

use crate::error::InterchangeError;
use std::fs;
use std::path::Path;

pub const DEFAULT_PROJECT_NAME: &str = "New Layout";
pub const MAX_PROJECT_NAME_CHARS: usize = 200;
pub const LAYOUT_FILE_EXTENSION: &str = ".xml";

/// Empty names become [`DEFAULT_PROJECT_NAME`]; long names are cut to
/// [`MAX_PROJECT_NAME_CHARS`] characters.
pub fn normalize_project_name(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_PROJECT_NAME.to_string();
    }
    name.chars().take(MAX_PROJECT_NAME_CHARS).collect()
}

/// Appends `.xml` unless the name already ends with it.
pub fn with_xml_extension(name: &str) -> String {
    if name.ends_with(LAYOUT_FILE_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, LAYOUT_FILE_EXTENSION)
    }
}

/// The project name a layout file opens under: its file name.
pub fn project_name_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    normalize_project_name(&name)
}

pub fn read_layout_file<P: AsRef<Path>>(path: P) -> Result<String, InterchangeError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        InterchangeError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read layout from '{}': {}", path.display(), e),
        ))
    })
}

/// Writes markup to `path`, adding the `.xml` extension if it is missing.
/// Returns the path actually written.
pub fn write_layout_file<P: AsRef<Path>>(path: P, xml: &str) -> Result<std::path::PathBuf, InterchangeError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| with_xml_extension(&n.to_string_lossy()))
        .ok_or_else(|| {
            InterchangeError::Config(format!("'{}' does not name a file", path.display()))
        })?;
    let target = path.with_file_name(file_name);
    fs::write(&target, xml)?;
    log::debug!("Wrote {} bytes to {}", xml.len(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_project_name() {
        assert_eq!(normalize_project_name(""), "New Layout");
        assert_eq!(normalize_project_name("Dialog"), "Dialog");
        let long = "あ".repeat(250);
        assert_eq!(normalize_project_name(&long).chars().count(), 200);
    }

    #[test]
    fn test_with_xml_extension() {
        assert_eq!(with_xml_extension("form"), "form.xml");
        assert_eq!(with_xml_extension("form.xml"), "form.xml");
        assert_eq!(with_xml_extension("form.XML"), "form.XML.xml");
    }

    #[test]
    fn test_project_name_from_path() {
        assert_eq!(project_name_from_path(Path::new("/tmp/dialog.xml")), "dialog.xml");
        assert_eq!(project_name_from_path(Path::new("/")), "New Layout");
    }

    #[test]
    fn test_write_and_read_layout_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_layout_file(dir.path().join("form"), "<Layout/>").unwrap();
        assert_eq!(written, dir.path().join("form.xml"));
        assert_eq!(read_layout_file(&written).unwrap(), "<Layout/>");
        assert!(matches!(
            read_layout_file(dir.path().join("missing.xml")),
            Err(InterchangeError::Io(_))
        ));
    }
}
