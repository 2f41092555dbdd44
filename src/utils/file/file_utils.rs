use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn file_writer<W>(w: W) -> std::io::BufWriter<W>
where
    W: Write,
{
    std::io::BufWriter::new(w)
}

/// Directory of `file_path`, `.` for bare file names.
pub fn get_parent_dir(file_path: &Path) -> PathBuf {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub fn prepare_parent_dir(file_path: &Path) -> std::io::Result<PathBuf> {
    let dir = get_parent_dir(file_path);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Writes `content` next to `file_path` and renames it into place.
/// An existing file is only replaced once the new content is completely written.
pub fn persist_text_file(file_path: &Path, content: &str) -> std::io::Result<()> {
    let dir = prepare_parent_dir(file_path)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".m3ugen-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let temp_file = builder.tempfile_in(&dir)?;
    {
        let mut writer = file_writer(temp_file.as_file());
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(file_path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{get_parent_dir, persist_text_file};
    use std::path::{Path, PathBuf};

    #[test]
    fn test_parent_dir() {
        assert_eq!(get_parent_dir(Path::new("playlist.m3u")), PathBuf::from("."));
        assert_eq!(get_parent_dir(Path::new("/data/playlist.m3u")), PathBuf::from("/data"));
    }

    #[test]
    fn test_persist_creates_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("nested").join("deeper").join("playlist.m3u");

        persist_text_file(&file_path, "#EXTM3U\nfirst content which is longer\n").unwrap();
        persist_text_file(&file_path, "#EXTM3U\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "#EXTM3U\n");
        let leftovers = std::fs::read_dir(file_path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
