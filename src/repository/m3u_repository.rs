use crate::error::{m3ugen_err, M3uGenError, M3uGenErrorKind};
use crate::model::{M3uPlaylistItem, M3U_HEADER};
use crate::utils::persist_text_file;
use std::path::Path;

macro_rules! cant_write_result {
    ($path:expr, $err:expr) => {
        m3ugen_err!(M3uGenErrorKind::Io, "failed to write m3u playlist: {} - {}", $path.display(), $err)
    }
}

pub fn m3u_render_playlist(m3u_playlist: &[M3uPlaylistItem]) -> String {
    let mut content = String::with_capacity(16 + m3u_playlist.len() * 256);
    content.push_str(M3U_HEADER);
    content.push('\n');
    for m3u in m3u_playlist {
        content.push_str(&m3u.to_m3u());
        content.push('\n');
    }
    content
}

/// Replaces the playlist file with the rendered items.
pub fn m3u_write_playlist(m3u_filename: &Path, m3u_playlist: &[M3uPlaylistItem]) -> Result<(), M3uGenError> {
    let content = m3u_render_playlist(m3u_playlist);
    persist_text_file(m3u_filename, &content).map_err(|err| cant_write_result!(m3u_filename, err))
}

#[cfg(test)]
mod tests {
    use super::{m3u_render_playlist, m3u_write_playlist};
    use crate::error::M3uGenErrorKind;
    use crate::model::M3uPlaylistItem;

    fn item(id: &str, name: &str, group: &str) -> M3uPlaylistItem {
        M3uPlaylistItem {
            name: name.to_string(),
            logo: String::new(),
            group: group.to_string(),
            url: format!("http://provider.tv/live/john/secret/{id}.ts"),
        }
    }

    #[test]
    fn test_render_empty_playlist() {
        assert_eq!(m3u_render_playlist(&[]), "#EXTM3U\n");
    }

    #[test]
    fn test_render_playlist() {
        let content = m3u_render_playlist(&[item("1", "News", "World News"), item("2", "Movie", "General")]);
        let expected = "#EXTM3U\n\
            #EXTINF:-1 tvg-id=\"\" tvg-name=\"News\" tvg-logo=\"\" group-title=\"World News\",News\n\
            http://provider.tv/live/john/secret/1.ts\n\
            #EXTINF:-1 tvg-id=\"\" tvg-name=\"Movie\" tvg-logo=\"\" group-title=\"General\",Movie\n\
            http://provider.tv/live/john/secret/2.ts\n";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_write_playlist() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("out").join("playlist.m3u");
        let playlist = vec![item("1", "News", "World News")];
        m3u_write_playlist(&file_path, &playlist).unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), m3u_render_playlist(&playlist));
    }

    #[test]
    fn test_write_playlist_fails_on_file_as_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let err = m3u_write_playlist(&blocker.join("playlist.m3u"), &[]).unwrap_err();
        assert_eq!(err.kind, M3uGenErrorKind::Io);
    }
}
