use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Location {
    pub id: ID,
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateLocationInput {
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    pub fn new(id: ID, data: CreateLocationInput) -> Self {
        Self {
            id,
            name: data.name,
            desc: data.desc,
            lat: data.lat,
            lng: data.lng,
        }
    }
}

impl UpdateLocationInput {
    pub fn apply(self, location: &mut Location) {
        if let Some(name) = self.name {
            location.name = name;
        }
        if let Some(desc) = self.desc {
            location.desc = desc;
        }
        if let Some(lat) = self.lat {
            location.lat = lat;
        }
        if let Some(lng) = self.lng {
            location.lng = lng;
        }
    }
}
