use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: ID, data: CreateUserInput) -> Self {
        Self {
            id,
            username: data.username,
            email: data.email,
        }
    }
}

impl UpdateUserInput {
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}
