use crate::utils::{deserialize_as_option_id, deserialize_as_option_string};
use serde::Deserialize;
use std::collections::HashMap;

pub const XC_PLAYER_API: &str = "player_api.php";
pub const XC_ACTION_GET_LIVE_CATEGORIES: &str = "get_live_categories";
pub const XC_ACTION_GET_LIVE_STREAMS: &str = "get_live_streams";
pub const XC_LIVE_CONTEXT: &str = "live";
pub const XC_LIVE_EXTENSION: &str = "ts";

/// category id -> category name
pub type CategoryMap = HashMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XtreamCategory {
    #[serde(default, deserialize_with = "deserialize_as_option_id")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XtreamLiveStream {
    #[serde(default, deserialize_with = "deserialize_as_option_id")]
    pub stream_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub stream_icon: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_id")]
    pub category_id: Option<String>,
}
