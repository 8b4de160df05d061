use crate::db;
use crate::error::{Result, StoreError};
use crate::paths;
use rusqlite::backup::Backup;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PAGES_PER_STEP: i32 = 100;
const PAUSE_BETWEEN_STEPS: Duration = Duration::from_millis(10);

/// Snapshot the live order database to `path` using the sqlite online backup
/// API. Refuses targets that would clobber the open database or its WAL/SHM
/// sidecars.
pub fn backup_to(conn: &Connection, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let target = resolve_target(path)?;

    if let Some(main) = open_db_file(conn)? {
        let main = resolve_target(&main)?;
        if target == main || is_sidecar(&target, &main) || same_inode(&target, &main)? {
            return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
        }
    }

    let mut dest = Connection::open(&target)?;
    Backup::new(conn, &mut dest)?.run_to_completion(PAGES_PER_STEP, PAUSE_BETWEEN_STEPS, None)?;
    db::restrict_db_permissions(&target)?;
    Ok(())
}

// Canonicalize through the parent so not-yet-existing targets still compare
// correctly against the open database path.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    Ok(fs::canonicalize(parent)?.join(file_name))
}

fn open_db_file(conn: &Connection) -> Result<Option<PathBuf>> {
    let mut stmt = conn.prepare("PRAGMA database_list;")?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        let file: String = row.get(2)?;
        if name == "main" && !file.is_empty() {
            return Ok(Some(PathBuf::from(file)));
        }
    }
    Ok(None)
}

fn is_sidecar(target: &Path, main: &Path) -> bool {
    ["-wal", "-shm"].iter().any(|suffix| {
        let mut sidecar = main.as_os_str().to_owned();
        sidecar.push(suffix);
        target == Path::new(&sidecar)
    })
}

#[cfg(unix)]
fn same_inode(target: &Path, main: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !main.exists() {
        return Ok(false);
    }
    let (a, b) = (fs::metadata(target)?, fs::metadata(main)?);
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn same_inode(_target: &Path, _main: &Path) -> Result<bool> {
    Ok(false)
}
