//! Relationship fields, resolved with a fresh lookup on every read.
//!
//! References are not enforced, so a dangling `user_id` or `location_id`
//! resolves to `null` rather than failing the parent object.

use async_graphql::{ComplexObject, Context, ErrorExtensions, Result};

use crate::graphql::store;
use crate::models::{Event, Location, Participant, User};

#[ComplexObject]
impl Event {
    /// The organiser.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        store(ctx)?
            .users
            .find_by_id(&self.user_id)
            .map_err(|err| err.extend())
    }

    async fn location(&self, ctx: &Context<'_>) -> Result<Option<Location>> {
        store(ctx)?
            .locations
            .find_by_id(&self.location_id)
            .map_err(|err| err.extend())
    }

    /// Participants whose `event_id` is this event.
    async fn participants(&self, ctx: &Context<'_>) -> Result<Vec<Participant>> {
        store(ctx)?
            .participants
            .filter(|participant| participant.event_id == self.id)
            .map_err(|err| err.extend())
    }
}

#[ComplexObject]
impl Participant {
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        store(ctx)?
            .users
            .find_by_id(&self.user_id)
            .map_err(|err| err.extend())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::graphql::test_support::{run, schema};
    use crate::graphql::AppSchema;

    const EVENT_WITH_RELATIONS: &str = "query($id: ID!) {
        event(id: $id) {
            id
            user { id username }
            location { id name }
            participants { id user { username } }
        }
    }";

    async fn create(schema: &AppSchema, mutation: &str, field: &str) -> String {
        let data = run(schema, mutation, json!({})).await;
        data[field]["id"].as_str().unwrap().to_string()
    }

    async fn create_event(schema: &AppSchema, user_id: &str, location_id: &str) -> String {
        let data = run(
            schema,
            "mutation($data: CreateEventInput!) { createEvent(data: $data) { id } }",
            json!({ "data": {
                "title": "T", "desc": "d", "date": "2024-01-01",
                "from": "10:00", "to": "11:00",
                "location_id": location_id, "user_id": user_id
            } }),
        )
        .await;
        data["createEvent"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_event_resolves_user_and_location() {
        let (schema, _store) = schema();
        let user_id = create(
            &schema,
            r#"mutation { createUser(data: { username: "a", email: "a@x.com" }) { id } }"#,
            "createUser",
        )
        .await;
        let location_id = create(
            &schema,
            r#"mutation { createLocation(data: { name: "Hall", desc: "d", lat: 1.0, lng: 2.0 }) { id } }"#,
            "createLocation",
        )
        .await;
        let event_id = create_event(&schema, &user_id, &location_id).await;

        let data = run(&schema, EVENT_WITH_RELATIONS, json!({ "id": event_id })).await;
        assert_eq!(data["event"]["user"]["id"], user_id.as_str());
        assert_eq!(data["event"]["user"]["username"], "a");
        assert_eq!(data["event"]["location"]["id"], location_id.as_str());
        assert_eq!(data["event"]["location"]["name"], "Hall");
        assert_eq!(data["event"]["participants"], json!([]));
    }

    #[tokio::test]
    async fn test_participants_link_through_event_id() {
        let (schema, _store) = schema();
        let user_id = create(
            &schema,
            r#"mutation { createUser(data: { username: "guest", email: "g@x.com" }) { id } }"#,
            "createUser",
        )
        .await;
        let event_id = create_event(&schema, &user_id, "l1").await;
        let other_event_id = create_event(&schema, &user_id, "l1").await;

        let add_participant =
            "mutation($data: CreateParticipantInput!) { createParticipant(data: $data) { id } }";
        let joined = run(
            &schema,
            add_participant,
            json!({ "data": { "user_id": user_id, "event_id": event_id } }),
        )
        .await;
        run(
            &schema,
            add_participant,
            json!({ "data": { "user_id": user_id, "event_id": other_event_id } }),
        )
        .await;

        let data = run(&schema, EVENT_WITH_RELATIONS, json!({ "id": event_id })).await;
        assert_eq!(
            data["event"]["participants"],
            json!([{ "id": joined["createParticipant"]["id"], "user": { "username": "guest" } }])
        );
    }

    #[tokio::test]
    async fn test_dangling_references_resolve_to_null() {
        let (schema, _store) = schema();
        let user_id = create(
            &schema,
            r#"mutation { createUser(data: { username: "a", email: "a@x.com" }) { id } }"#,
            "createUser",
        )
        .await;
        let event_id = create_event(&schema, &user_id, "gone").await;
        run(
            &schema,
            "mutation($id: ID!) { deleteUser(id: $id) { id } }",
            json!({ "id": user_id }),
        )
        .await;

        let data = run(&schema, EVENT_WITH_RELATIONS, json!({ "id": event_id })).await;
        assert_eq!(data["event"]["id"], event_id.as_str());
        assert_eq!(data["event"]["user"], json!(null));
        assert_eq!(data["event"]["location"], json!(null));
    }

    #[tokio::test]
    async fn test_participant_resolves_user() {
        let (schema, _store) = schema();
        let user_id = create(
            &schema,
            r#"mutation { createUser(data: { username: "p", email: "p@x.com" }) { id } }"#,
            "createUser",
        )
        .await;
        let participant_id = run(
            &schema,
            "mutation($data: CreateParticipantInput!) { createParticipant(data: $data) { id } }",
            json!({ "data": { "user_id": user_id, "event_id": "e1" } }),
        )
        .await["createParticipant"]["id"]
            .clone();

        let data = run(
            &schema,
            "query($id: ID!) { participant(id: $id) { user_id event_id user { id } } }",
            json!({ "id": participant_id }),
        )
        .await;
        assert_eq!(
            data["participant"],
            json!({ "user_id": user_id, "event_id": "e1", "user": { "id": user_id } })
        );
    }
}
