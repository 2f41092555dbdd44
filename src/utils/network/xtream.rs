use crate::error::{m3ugen_err, M3uGenError, M3uGenErrorKind};
use crate::model::{Config, XtreamCategory, XtreamLiveStream};
use crate::model::{XC_ACTION_GET_LIVE_CATEGORIES, XC_ACTION_GET_LIVE_STREAMS, XC_LIVE_CONTEXT, XC_LIVE_EXTENSION, XC_PLAYER_API};
use crate::utils::request;
use reqwest::header::HeaderMap;
use url::Url;

pub fn get_xtream_player_api_action_url(config: &Config, action: &str) -> Result<Url, M3uGenError> {
    let mut url = Url::parse(&format!("{}/{XC_PLAYER_API}", config.url))
        .map_err(|err| m3ugen_err!(M3uGenErrorKind::Config, "Malformed url {}: {err}", config.url))?;
    url.query_pairs_mut()
        .append_pair("username", &config.username)
        .append_pair("password", &config.password)
        .append_pair("action", action);
    Ok(url)
}

#[inline]
pub fn get_xtream_live_stream_url(url: &str, username: &str, password: &str, stream_id: &str) -> String {
    format!("{url}/{XC_LIVE_CONTEXT}/{username}/{password}/{stream_id}.{XC_LIVE_EXTENSION}")
}

pub async fn get_xtream_live_categories(client: &reqwest::Client, config: &Config, headers: &HeaderMap) -> Result<Vec<XtreamCategory>, M3uGenError> {
    let url = get_xtream_player_api_action_url(config, XC_ACTION_GET_LIVE_CATEGORIES)?;
    request::download_json_content::<Vec<XtreamCategory>>(client, &url, headers).await
}

pub async fn get_xtream_live_streams(client: &reqwest::Client, config: &Config, headers: &HeaderMap) -> Result<Vec<XtreamLiveStream>, M3uGenError> {
    let url = get_xtream_player_api_action_url(config, XC_ACTION_GET_LIVE_STREAMS)?;
    request::download_json_content::<Vec<XtreamLiveStream>>(client, &url, headers).await
}
