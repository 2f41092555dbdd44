pub const M3U_HEADER: &str = "#EXTM3U";
pub const DEFAULT_GROUP: &str = "General";
pub const DEFAULT_CHANNEL_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M3uPlaylistItem {
    pub name: String,
    pub logo: String,
    pub group: String,
    pub url: String,
}

impl M3uPlaylistItem {
    /// `#EXTINF` line and stream url, without trailing newline.
    pub fn to_m3u(&self) -> String {
        format!("#EXTINF:-1 tvg-id=\"\" tvg-name=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}\n{}",
                self.name, self.logo, self.group, self.name, self.url)
    }
}
