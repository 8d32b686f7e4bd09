//! Family-directory enumeration for gftype-core

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use walkdir::WalkDir;

/// One candidate font-package directory under a collection root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub root: PathBuf,
    pub family_dir: String,
}

impl PackageRef {
    /// Full path of the family directory.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.family_dir)
    }
}

/// Trait for enumerating font packages from some backing store.
pub trait PackageDiscovery {
    fn discover(&self) -> Result<Vec<PackageRef>>;
}

/// Non-recursive lister that collects the immediate child directories of
/// each root, sorted by name so enumeration order is stable across runs.
#[derive(Debug, Clone)]
pub struct DirListing {
    roots: Vec<PathBuf>,
}

impl DirListing {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self { roots }
    }
}

impl PackageDiscovery for DirListing {
    fn discover(&self) -> Result<Vec<PackageRef>> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                return Err(anyhow!("root path does not exist: {}", root.display()));
            }

            let mut names = Vec::new();
            for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
                let entry = entry?;
                if entry.file_type().is_dir() {
                    if let Some(name) = dir_name(entry.path()) {
                        names.push(name);
                    }
                }
            }

            names.sort_unstable();
            found.extend(names.into_iter().map(|family_dir| PackageRef {
                root: root.clone(),
                family_dir,
            }));
        }

        Ok(found)
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::{DirListing, PackageDiscovery};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_only_immediate_directories() {
        let tmp = tempdir().expect("tempdir");
        fs::create_dir_all(tmp.path().join("roboto/static")).expect("mkdir");
        fs::create_dir_all(tmp.path().join("lato")).expect("mkdir");
        fs::write(tmp.path().join("README.md"), b"not a family").expect("touch");

        let listing = DirListing::new([tmp.path()]);
        let packages = listing.discover().expect("discover");

        let names: Vec<&str> = packages.iter().map(|p| p.family_dir.as_str()).collect();
        assert_eq!(names, vec!["lato", "roboto"]);
    }

    #[test]
    fn sorts_by_directory_name() {
        let tmp = tempdir().expect("tempdir");
        for name in ["zilla", "abel", "merriweather"] {
            fs::create_dir_all(tmp.path().join(name)).expect("mkdir");
        }

        let listing = DirListing::new([tmp.path()]);
        let packages = listing.discover().expect("discover");

        let names: Vec<&str> = packages.iter().map(|p| p.family_dir.as_str()).collect();
        assert_eq!(names, vec!["abel", "merriweather", "zilla"]);
    }

    #[test]
    fn returns_error_for_missing_root() {
        let listing = DirListing::new(["/nonexistent/gftype-fonts"]);
        assert!(listing.discover().is_err());
    }
}
