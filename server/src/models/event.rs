use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// An event organised by `user_id` at `location_id`.
///
/// `date`, `from` and `to` are opaque strings; no calendar validation is applied.
/// The `user`, `location` and `participants` fields are resolved on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Event {
    pub id: ID,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: ID,
    pub user_id: ID,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateEventInput {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: ID,
    pub user_id: ID,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub location_id: Option<ID>,
    pub user_id: Option<ID>,
}

impl Event {
    pub fn new(id: ID, data: CreateEventInput) -> Self {
        Self {
            id,
            title: data.title,
            desc: data.desc,
            date: data.date,
            from: data.from,
            to: data.to,
            location_id: data.location_id,
            user_id: data.user_id,
        }
    }
}

impl UpdateEventInput {
    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(desc) = self.desc {
            event.desc = desc;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(from) = self.from {
            event.from = from;
        }
        if let Some(to) = self.to {
            event.to = to;
        }
        if let Some(location_id) = self.location_id {
            event.location_id = location_id;
        }
        if let Some(user_id) = self.user_id {
            event.user_id = user_id;
        }
    }
}
