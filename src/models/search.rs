use serde::{Deserialize, Serialize};

/// Which attribute of an artist produced a search hit
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Artist,
    FirstAlbum,
    CreationDate,
    Member,
    Location,
}

impl Category {
    /// Human-readable qualifier shown next to a hit, e.g. `member of Queen`
    pub fn qualifier(&self, owner: &str) -> String {
        match self {
            Category::Artist => "artist/band".to_string(),
            Category::FirstAlbum => format!("FirstAlbum of {}", owner),
            Category::CreationDate => format!("Creation Date of {}", owner),
            Category::Member => format!("member of {}", owner),
            Category::Location => format!("location {}", owner),
        }
    }
}

/// One entry of a free-text search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Identifier of the owning artist
    pub id: u32,

    /// Matched text (artist name, album label, year, member or location)
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub category: Category,

    /// Serialized as `type` for the suggestion script
    #[serde(rename = "type")]
    pub qualifier: String,
}

impl SearchResult {
    pub fn new(
        category: Category,
        id: u32,
        name: impl Into<String>,
        owner: &str,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image,
            category,
            qualifier: category.qualifier(owner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_qualifiers() {
        assert_eq!(Category::Artist.qualifier("Queen"), "artist/band");
        assert_eq!(Category::Member.qualifier("Queen"), "member of Queen");
        assert_eq!(Category::FirstAlbum.qualifier("Queen"), "FirstAlbum of Queen");
        assert_eq!(Category::CreationDate.qualifier("Queen"), "Creation Date of Queen");
        assert_eq!(Category::Location.qualifier("Queen"), "location Queen");
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::FirstAlbum.to_string(), "first_album");
        assert_eq!(Category::from_str("creation_date").unwrap(), Category::CreationDate);
    }

    #[test]
    fn test_result_serializes_type_field() {
        let result = SearchResult::new(Category::Member, 1, "Freddie Mercury", "Queen", None);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["type"], "member of Queen");
        assert_eq!(json["category"], "member");
        assert!(json.get("image").is_none());
    }
}
