use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// Links a user to an event. `user` is resolved from `user_id` on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Participant {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateParticipantInput {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateParticipantInput {
    pub user_id: Option<ID>,
    pub event_id: Option<ID>,
}

impl Participant {
    pub fn new(id: ID, data: CreateParticipantInput) -> Self {
        Self {
            id,
            user_id: data.user_id,
            event_id: data.event_id,
        }
    }
}

impl UpdateParticipantInput {
    pub fn apply(self, participant: &mut Participant) {
        if let Some(user_id) = self.user_id {
            participant.user_id = user_id;
        }
        if let Some(event_id) = self.event_id {
            participant.event_id = event_id;
        }
    }
}
