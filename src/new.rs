use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::*;

/// Write a `_folio.yml` holding the built-in portfolio values into `dest`.
pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> Result<path::PathBuf> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> Result<path::PathBuf> {
    fs::create_dir_all(dest)?;

    let file = dest.join(folio_config::CONFIG_FILE);
    let content = folio_config::Config::default().to_string();
    create_file(&file, &content)?;

    Ok(file)
}

fn create_file(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_project_loads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let file = create_new_project(tmp.path()).unwrap();
        let config = folio_config::Config::from_file(&file).unwrap();
        assert_eq!(config.root, tmp.path());
        assert_eq!(config.global, folio_config::Global::default());
        assert_eq!(config.footer, folio_config::Footer::default());
    }

    #[test]
    fn new_project_does_not_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        create_new_project(tmp.path()).unwrap();
        assert!(create_new_project(tmp.path()).is_err());
    }
}
