use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::InputFormat;

/// Candidate inputs for a batch run
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Files with a supported extension, in sorted order
    pub images: Vec<PathBuf>,
    /// Files passed over because of their extension
    pub skipped: Vec<PathBuf>,
}

/// Collect the images under `input`.
///
/// A file yields itself; a directory is walked recursively and filtered by extension.
/// Fails with `PathNotFound` when `input` is missing and `NoImagesFound` when nothing
/// usable remains.
pub fn discover_inputs(input: &Path) -> Result<Discovery> {
    let mut discovery = Discovery::default();

    if input.is_file() {
        if InputFormat::from_path(input).is_some() {
            discovery.images.push(input.to_path_buf());
        } else {
            warn!(
                "{}",
                Error::UnsupportedFormat {
                    path: input.to_path_buf()
                }
            );
            discovery.skipped.push(input.to_path_buf());
        }
    } else if input.is_dir() {
        walk_directory(input, &mut discovery)?;
        discovery.images.sort();
        discovery.skipped.sort();
    } else {
        return Err(Error::PathNotFound {
            path: input.to_path_buf(),
        });
    }

    if discovery.images.is_empty() {
        return Err(Error::NoImagesFound {
            path: input.to_path_buf(),
        });
    }

    Ok(discovery)
}

fn walk_directory(dir: &Path, discovery: &mut Discovery) -> Result<()> {
    // Symlinked directories are not followed, so link cycles cannot repeat inputs
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if InputFormat::from_path(&path).is_some() {
            discovery.images.push(path);
        } else {
            debug!("Skipping unsupported file: {:?}", path);
            discovery.skipped.push(path);
        }
    }
    Ok(())
}

/// Output location for `input`: same base name with a `.png` extension, placed
/// directly in `output_dir`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or(input.as_os_str());
    output_dir.join(name).with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn walks_directories_recursively_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.PNG"));
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("nested/deeper/c.webp"));
        touch(&dir.path().join("readme.md"));

        let found = discover_inputs(dir.path()).unwrap();

        let names: Vec<_> = found
            .images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.webp"]);
        assert_eq!(found.skipped.len(), 1);
    }

    #[test]
    fn single_file_is_taken_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.gif");
        touch(&file);

        let found = discover_inputs(&file).unwrap();
        assert_eq!(found.images, vec![file]);
    }

    #[test]
    fn missing_input_is_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_inputs(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::PathNotFound { .. }));
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("notes.txt"));
        let err = discover_inputs(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoImagesFound { .. }));
    }

    #[test]
    fn unsupported_single_file_yields_no_images() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("clip.tiff");
        touch(&file);
        let err = discover_inputs(&file).unwrap_err();
        assert!(matches!(err, Error::NoImagesFound { .. }));
    }

    #[test]
    fn output_name_swaps_extension() {
        let out = output_path_for(Path::new("in/sub/cat.face.JPG"), Path::new("out"));
        assert_eq!(out, PathBuf::from("out/cat.face.png"));
        let out = output_path_for(Path::new("already.png"), Path::new("out"));
        assert_eq!(out, PathBuf::from("out/already.png"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        touch(&input.join("a.png"));
        std::os::unix::fs::symlink(&input, input.join("loop")).unwrap();

        let found = discover_inputs(&input).unwrap();

        assert_eq!(found.images, vec![input.join("a.png")]);
        assert!(found.skipped.is_empty());
    }
}
