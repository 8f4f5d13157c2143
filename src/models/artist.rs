use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An artist or band as published by the upstream catalog API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Stable identifier (1..=52 on the public API)
    pub id: u32,

    /// Image URL
    pub image: String,

    /// Display name
    pub name: String,

    /// Member names, in upstream order
    #[serde(default)]
    pub members: Vec<String>,

    /// Founding year
    pub creation_date: i32,

    /// First release label, formatted `dd-mm-yyyy`
    pub first_album: String,
}

impl Artist {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Tour locations for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSet {
    pub id: u32,

    #[serde(default)]
    pub locations: Vec<String>,
}

/// Envelope returned by `GET /locations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationIndex {
    #[serde(default)]
    pub index: Vec<LocationSet>,
}

/// Concert dates for one artist (`GET /dates/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertDates {
    pub id: u32,

    #[serde(default)]
    pub dates: Vec<String>,
}

/// Location to dates mapping for one artist (`GET /relation/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub id: u32,

    #[serde(rename = "datesLocations", default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Everything the profile page needs, fetched together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub artist: Artist,
    pub locations: LocationSet,
    pub dates: ConcertDates,
    pub relation: Relation,
}
