//! Release asset extraction
//!
//! Archives are unpacked natively (no external tools). The format is detected
//! from the asset file name; anything that is not a recognized archive is
//! treated as a bare executable and written as-is.

use std::io::{Cursor, Read};
use std::path::{Component, Path};

use tracing::debug;

use crate::install::error::InstallError;

/// Archive formats understood by [`extract_asset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    TarGz,
    Tar,
    Zip,
    Raw,
}

/// Detect the asset format from its file name
pub fn detect_format(file_name: &str) -> AssetFormat {
    let name = file_name.to_lowercase();
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        AssetFormat::TarGz
    } else if name.ends_with(".tar") {
        AssetFormat::Tar
    } else if name.ends_with(".zip") {
        AssetFormat::Zip
    } else {
        AssetFormat::Raw
    }
}

/// Extract a downloaded asset into `dest`, creating it if needed
pub fn extract_asset(bytes: &[u8], file_name: &str, dest: &Path) -> Result<(), InstallError> {
    std::fs::create_dir_all(dest)?;

    let format = detect_format(file_name);
    debug!("Extracting {} as {:?} into {:?}", file_name, format, dest);

    match format {
        AssetFormat::TarGz => extract_tar(flate2::read::GzDecoder::new(bytes), dest),
        AssetFormat::Tar => extract_tar(bytes, dest),
        AssetFormat::Zip => extract_zip(bytes, dest),
        AssetFormat::Raw => write_raw(bytes, file_name, dest),
    }
}

fn is_unsafe_path(path: &Path) -> bool {
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
}

fn extract_tar<R: Read>(reader: R, dest: &Path) -> Result<(), InstallError> {
    let mut archive = tar::Archive::new(reader);

    for entry in archive
        .entries()
        .map_err(|e| InstallError::Archive(format!("tar read error: {}", e)))?
    {
        let mut entry =
            entry.map_err(|e| InstallError::Archive(format!("tar entry error: {}", e)))?;

        let path = entry
            .path()
            .map_err(|e| InstallError::Archive(format!("tar path error: {}", e)))?
            .into_owned();

        if is_unsafe_path(&path) {
            return Err(InstallError::Archive(format!(
                "tar contains unsafe path: {}",
                path.display()
            )));
        }

        let entry_type = entry.header().entry_type();
        if entry_type.is_symlink() || entry_type.is_hard_link() {
            let target = entry
                .link_name()
                .map_err(|e| InstallError::Archive(format!("tar link_name error: {}", e)))?;
            if target.as_deref().is_none_or(is_unsafe_path) {
                return Err(InstallError::Archive(format!(
                    "tar contains unsafe link: {}",
                    path.display()
                )));
            }
        }

        // Some archives contain a "." entry
        if path.as_os_str().is_empty() || path == Path::new(".") {
            continue;
        }

        // Hard link targets resolve against dest
        let unpacked = entry.unpack_in(dest).map_err(|e| {
            InstallError::Archive(format!("unpack error for {}: {}", path.display(), e))
        })?;
        if !unpacked {
            return Err(InstallError::Archive(format!(
                "tar entry escapes destination: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

fn extract_zip(bytes: &[u8], dest: &Path) -> Result<(), InstallError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| InstallError::Archive(format!("zip read error: {}", e)))?;

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| InstallError::Archive(format!("zip entry error: {}", e)))?;

        let Some(relative) = file.enclosed_name() else {
            return Err(InstallError::Archive(format!(
                "zip contains unsafe path: {}",
                file.name()
            )));
        };
        let outpath = dest.join(relative);

        if file.is_dir() {
            std::fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut outfile = std::fs::File::create(&outpath)?;
        std::io::copy(&mut file, &mut outfile)?;

        #[cfg(unix)]
        if let Some(mode) = file.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

fn write_raw(bytes: &[u8], file_name: &str, dest: &Path) -> Result<(), InstallError> {
    let path = Path::new(file_name);
    if is_unsafe_path(path) || path.components().count() != 1 {
        return Err(InstallError::Archive(format!(
            "invalid asset file name: {}",
            file_name
        )));
    }

    let outpath = dest.join(path);
    std::fs::write(&outpath, bytes)?;
    mark_executable(&outpath)?;
    Ok(())
}

/// Sets the executable bits on unix, no-op elsewhere
pub fn mark_executable(path: &Path) -> Result<(), InstallError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(path)?.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(path, permissions)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
