use crate::error::{m3ugen_err, M3uGenError, M3uGenErrorKind};
use crate::model::{CategoryMap, Config, ConfigDto};
use crate::processing::parser::xtream::{map_to_category_map, parse_xtream_live_streams};
use crate::repository::m3u_repository::m3u_write_playlist;
use crate::utils::request::{create_client, get_request_headers};
use crate::utils::xtream::{get_xtream_live_categories, get_xtream_live_streams};
use crate::utils::debug_if_enabled;
use log::{info, warn};
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Category names only make the playlist nicer, a failing request degrades to an empty map.
pub async fn resolve_categories(client: &reqwest::Client, config: &Config, headers: &HeaderMap) -> CategoryMap {
    match get_xtream_live_categories(client, config, headers).await {
        Ok(categories) => {
            let category_map = map_to_category_map(categories);
            debug_if_enabled!("Resolved {} categories", category_map.len());
            category_map
        }
        Err(err) => {
            warn!("Could not fetch categories: {err}");
            CategoryMap::new()
        }
    }
}

/// One fetch, render and write pass. Returns the interval to wait before the next one.
///
/// Nothing is written when the configuration is incomplete or the stream listing fails,
/// so the playlist of the last successful run stays in place.
pub async fn run_cycle(config_dto: &ConfigDto) -> Result<Duration, M3uGenError> {
    let config = config_dto.prepare()?;

    let client = create_client(&config)
        .build()
        .map_err(|err| m3ugen_err!(M3uGenErrorKind::Network, "Failed to build client {err}"))?;
    let headers = get_request_headers(Some(&config.headers), Some(&config.user_agent));

    let category_map = if config.use_categories {
        resolve_categories(&client, &config, &headers).await
    } else {
        CategoryMap::new()
    };

    let streams = get_xtream_live_streams(&client, &config, &headers).await?;
    let stream_count = streams.len();
    let playlist = parse_xtream_live_streams(&config, streams, &category_map);

    m3u_write_playlist(&config.output_file, &playlist)?;

    info!("Playlist written to {} with {} entries", config.output_file.display(), playlist.len());
    if stream_count > playlist.len() {
        debug_if_enabled!("Skipped {} streams without stream id", stream_count - playlist.len());
    }
    Ok(config.refresh_interval)
}
