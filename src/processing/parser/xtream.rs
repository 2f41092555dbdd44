use crate::model::{CategoryMap, Config, M3uPlaylistItem, XtreamCategory, XtreamLiveStream};
use crate::model::{DEFAULT_CHANNEL_NAME, DEFAULT_GROUP};
use crate::utils::xtream::get_xtream_live_stream_url;
use std::borrow::Cow;

/// Records without a category id are skipped, duplicate ids keep the last name.
pub fn map_to_category_map(categories: Vec<XtreamCategory>) -> CategoryMap {
    categories
        .into_iter()
        .filter_map(|category| match (category.category_id, category.category_name) {
            (Some(id), Some(name)) => Some((id, name)),
            _ => None,
        })
        .collect()
}

pub fn resolve_group_title<'a>(category_id: Option<&'a str>, category_map: &'a CategoryMap) -> Cow<'a, str> {
    match category_id {
        Some(id) if !id.is_empty() => category_map
            .get(id)
            .map_or_else(|| Cow::Owned(format!("Group {id}")), |name| Cow::Borrowed(name.as_str())),
        _ => Cow::Borrowed(DEFAULT_GROUP),
    }
}

/// Turns the live stream listing into playlist items, keeping the provider order.
/// Streams without a stream id can't be played and are dropped.
pub fn parse_xtream_live_streams(config: &Config, streams: Vec<XtreamLiveStream>, category_map: &CategoryMap) -> Vec<M3uPlaylistItem> {
    streams
        .into_iter()
        .filter_map(|stream| {
            let stream_id = stream.stream_id?;
            let group = resolve_group_title(stream.category_id.as_deref(), category_map).into_owned();
            let url = get_xtream_live_stream_url(&config.url, &config.username, &config.password, &stream_id);
            Some(M3uPlaylistItem {
                name: stream.name.unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string()),
                logo: stream.stream_icon.unwrap_or_default(),
                group,
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{map_to_category_map, parse_xtream_live_streams, resolve_group_title};
    use crate::model::{CategoryMap, Config, ConfigDto, XtreamCategory, XtreamLiveStream};

    fn test_config() -> Config {
        ConfigDto {
            url: Some("http://provider.tv".to_string()),
            username: Some("john".to_string()),
            password: Some("secret".to_string()),
            ..ConfigDto::default()
        }.prepare().unwrap()
    }

    fn streams_from_json(json: &str) -> Vec<XtreamLiveStream> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_category_map() {
        let categories: Vec<XtreamCategory> = serde_json::from_str(r#"[
            {"category_id": "10", "category_name": "World News", "parent_id": 0},
            {"category_id": 11, "category_name": "Sports"},
            {"category_name": "No id"},
            {"category_id": "12"},
            {"category_id": "10", "category_name": "News"}
        ]"#).unwrap();
        let category_map = map_to_category_map(categories);
        assert_eq!(category_map.len(), 2);
        assert_eq!(category_map.get("10").map(String::as_str), Some("News"));
        assert_eq!(category_map.get("11").map(String::as_str), Some("Sports"));
    }

    #[test]
    fn test_resolve_group_title() {
        let category_map = CategoryMap::from([("10".to_string(), "World News".to_string())]);
        assert_eq!(resolve_group_title(Some("10"), &category_map), "World News");
        assert_eq!(resolve_group_title(Some("99"), &category_map), "Group 99");
        assert_eq!(resolve_group_title(Some(""), &category_map), "General");
        assert_eq!(resolve_group_title(None, &category_map), "General");
    }

    #[test]
    fn test_parse_live_streams() {
        let streams = streams_from_json(r#"[
            {"stream_id": "1", "name": "News", "category_id": "10"},
            {"stream_id": 2, "name": "Movie", "category_id": ""},
            {"name": "NoID"}
        ]"#);
        let category_map = CategoryMap::from([("10".to_string(), "World News".to_string())]);
        let items = parse_xtream_live_streams(&test_config(), streams, &category_map);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "News");
        assert_eq!(items[0].group, "World News");
        assert_eq!(items[0].url, "http://provider.tv/live/john/secret/1.ts");
        assert_eq!(items[1].name, "Movie");
        assert_eq!(items[1].group, "General");
        assert_eq!(items[1].url, "http://provider.tv/live/john/secret/2.ts");
    }

    #[test]
    fn test_missing_ids_are_dropped() {
        let streams = streams_from_json(r#"[
            {"stream_id": null, "name": "Null"},
            {"stream_id": "", "name": "Empty"},
            {"stream_id": 0, "name": "Zero"},
            {"stream_id": 0.0, "name": "Float zero"},
            {"stream_id": "5", "category_id": 77, "stream_icon": "http://img.tv/5.png"}
        ]"#);
        let items = parse_xtream_live_streams(&test_config(), streams, &CategoryMap::new());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "http://provider.tv/live/john/secret/5.ts");
        assert_eq!(items[0].name, "Unknown");
        assert_eq!(items[0].logo, "http://img.tv/5.png");
        assert_eq!(items[0].group, "Group 77");
    }

    #[test]
    fn test_fetch_order_is_kept() {
        let streams = streams_from_json(r#"[
            {"stream_id": 30, "name": "C"},
            {"stream_id": 10, "name": "A"},
            {"stream_id": 20, "name": "B"}
        ]"#);
        let items = parse_xtream_live_streams(&test_config(), streams, &CategoryMap::new());
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
