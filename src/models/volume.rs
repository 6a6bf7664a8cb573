use crate::error::{BookshelfError, Result};
use crate::models::{BookId, RawVolume};
use serde::{Deserialize, Serialize};

/// Response of the list-search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeList {
    // The provider omits `items` entirely when nothing matched.
    #[serde(default)]
    pub items: Vec<VolumeRef>,
}

impl VolumeList {
    pub fn into_ids(self) -> Vec<BookId> {
        self.items.into_iter().map(|item| item.id).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRef {
    pub id: BookId,
}

/// Response of the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl Volume {
    /// Check that every field a `RawVolume` needs is present.
    pub fn into_raw(self, id: BookId) -> Result<RawVolume> {
        let info = self.volume_info;

        let title = info.title.ok_or_else(|| missing("volumeInfo.title"))?;
        let description = info
            .description
            .ok_or_else(|| missing("volumeInfo.description"))?;
        let thumbnail = info
            .image_links
            .and_then(|links| links.thumbnail)
            .ok_or_else(|| missing("volumeInfo.imageLinks.thumbnail"))?;

        Ok(RawVolume {
            id,
            title,
            description,
            thumbnail,
        })
    }
}

fn missing(field: &str) -> BookshelfError {
    BookshelfError::MissingField(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_list_keeps_provider_order() {
        let body = r#"{
            "kind": "books#volumes",
            "totalItems": 3,
            "items": [{"id": "c"}, {"id": "a", "etag": "x"}, {"id": "b"}]
        }"#;

        let list: VolumeList = serde_json::from_str(body).unwrap();
        let ids: Vec<String> = list.into_ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_volume_list_without_items_is_empty() {
        let list: VolumeList =
            serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(list.into_ids().is_empty());
    }

    #[test]
    fn test_volume_list_item_without_id_is_rejected() {
        let result = serde_json::from_str::<VolumeList>(r#"{"items": [{"etag": "x"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_complete_volume_converts() {
        let body = r#"{
            "id": "abc",
            "volumeInfo": {
                "title": "A History of Rome",
                "description": "From the founding to the fall.",
                "pageCount": 412,
                "imageLinks": {
                    "smallThumbnail": "http://books.google.com/small",
                    "thumbnail": "http://books.google.com/thumb"
                }
            }
        }"#;

        let volume: Volume = serde_json::from_str(body).unwrap();
        let raw = volume.into_raw(BookId::new("abc")).unwrap();

        assert_eq!(raw.id, BookId::new("abc"));
        assert_eq!(raw.title, "A History of Rome");
        assert_eq!(raw.description, "From the founding to the fall.");
        // raw records are not normalized
        assert_eq!(raw.thumbnail, "http://books.google.com/thumb");
    }

    #[test]
    fn test_missing_image_links_is_missing_field() {
        let body = r#"{"volumeInfo": {"title": "No Cover", "description": "d"}}"#;
        let volume: Volume = serde_json::from_str(body).unwrap();

        assert_eq!(
            volume.into_raw(BookId::new("x")).unwrap_err(),
            BookshelfError::MissingField("volumeInfo.imageLinks.thumbnail".to_string())
        );
    }

    #[test]
    fn test_small_thumbnail_alone_is_not_enough() {
        let body = r#"{"volumeInfo": {
            "title": "t",
            "description": "d",
            "imageLinks": {"smallThumbnail": "http://books.google.com/small"}
        }}"#;
        let volume: Volume = serde_json::from_str(body).unwrap();

        assert!(matches!(
            volume.into_raw(BookId::new("x")),
            Err(BookshelfError::MissingField(_))
        ));
    }

    #[test]
    fn test_missing_title_and_description_are_reported() {
        let no_title: Volume = serde_json::from_str(
            r#"{"volumeInfo": {"description": "d", "imageLinks": {"thumbnail": "t"}}}"#,
        )
        .unwrap();
        assert_eq!(
            no_title.into_raw(BookId::new("x")).unwrap_err(),
            BookshelfError::MissingField("volumeInfo.title".to_string())
        );

        let no_description: Volume = serde_json::from_str(
            r#"{"volumeInfo": {"title": "t", "imageLinks": {"thumbnail": "t"}}}"#,
        )
        .unwrap();
        assert_eq!(
            no_description.into_raw(BookId::new("x")).unwrap_err(),
            BookshelfError::MissingField("volumeInfo.description".to_string())
        );
    }

    #[test]
    fn test_missing_volume_info_is_a_decode_error() {
        let result = serde_json::from_str::<Volume>(r#"{"id": "abc"}"#);
        assert!(result.is_err());
    }
}
