use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file at `db_path` to `dest_file`, optionally
    /// replacing the copy with a `.zip` archive. Returns the final path, or
    /// `None` if the user declined to overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        assume_yes: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if target.exists() {
            let prompt = format!("The file '{}' already exists. Overwrite it?", target.display());
            if !confirm(&prompt, assume_yes) {
                info("Backup cancelled.");
                return Ok(None);
            }
        }

        // The raw copy of a compressed backup is a temporary file beside the archive.
        let copy_path = if compress {
            dest.with_extension("sqlite")
        } else {
            dest.to_path_buf()
        };

        fs::copy(src, &copy_path)?;

        let final_path = if compress {
            let compressed = compress_backup(&copy_path)?;
            if let Err(e) = fs::remove_file(&copy_path) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            compressed
        } else {
            copy_path
        };
        success(format!("Backup created: {}", final_path.display()));

        let pool = DbPool::new(db_path)?;
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Io(io::Error::other("backup path has no file name")))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}
