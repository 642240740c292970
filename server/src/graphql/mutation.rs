use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::info;

use crate::graphql::{store, DeleteAllOutput};
use crate::models::{
    CreateEventInput, CreateLocationInput, CreateParticipantInput, CreateUserInput, Event,
    Location, Participant, UpdateEventInput, UpdateLocationInput, UpdateParticipantInput,
    UpdateUserInput, User,
};
use crate::store::generate_id;

pub struct MutationRoot;

/// Update and delete fail with a `NOT_FOUND` error, and leave the store untouched,
/// when the id has no match. Delete returns the removed record.
#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> Result<User> {
        let user = User::new(ID(generate_id()), data);
        let user = store(ctx)?.users.append(user).map_err(|err| err.extend())?;
        info!(user_id = %user.id.as_str(), "User created");
        Ok(user)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateUserInput,
    ) -> Result<User> {
        let user = store(ctx)?
            .users
            .update(&id, |user| data.apply(user))
            .map_err(|err| err.extend())?;
        info!(user_id = %id.as_str(), "User updated");
        Ok(user)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let user = store(ctx)?.users.remove(&id).map_err(|err| err.extend())?;
        info!(user_id = %id.as_str(), "User deleted");
        Ok(user)
    }

    async fn delete_all_users(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let count = store(ctx)?.users.clear().map_err(|err| err.extend())?;
        info!(count, "All users deleted");
        Ok(count.into())
    }

    async fn create_location(
        &self,
        ctx: &Context<'_>,
        data: CreateLocationInput,
    ) -> Result<Location> {
        let location = Location::new(ID(generate_id()), data);
        let location = store(ctx)?
            .locations
            .append(location)
            .map_err(|err| err.extend())?;
        info!(location_id = %location.id.as_str(), "Location created");
        Ok(location)
    }

    async fn update_location(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateLocationInput,
    ) -> Result<Location> {
        let location = store(ctx)?
            .locations
            .update(&id, |location| data.apply(location))
            .map_err(|err| err.extend())?;
        info!(location_id = %id.as_str(), "Location updated");
        Ok(location)
    }

    async fn delete_location(&self, ctx: &Context<'_>, id: ID) -> Result<Location> {
        let location = store(ctx)?
            .locations
            .remove(&id)
            .map_err(|err| err.extend())?;
        info!(location_id = %id.as_str(), "Location deleted");
        Ok(location)
    }

    async fn delete_all_locations(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let count = store(ctx)?.locations.clear().map_err(|err| err.extend())?;
        info!(count, "All locations deleted");
        Ok(count.into())
    }

    async fn create_participant(
        &self,
        ctx: &Context<'_>,
        data: CreateParticipantInput,
    ) -> Result<Participant> {
        let participant = Participant::new(ID(generate_id()), data);
        let participant = store(ctx)?
            .participants
            .append(participant)
            .map_err(|err| err.extend())?;
        info!(
            participant_id = %participant.id.as_str(),
            event_id = %participant.event_id.as_str(),
            "Participant created"
        );
        Ok(participant)
    }

    async fn update_participant(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateParticipantInput,
    ) -> Result<Participant> {
        let participant = store(ctx)?
            .participants
            .update(&id, |participant| data.apply(participant))
            .map_err(|err| err.extend())?;
        info!(participant_id = %id.as_str(), "Participant updated");
        Ok(participant)
    }

    async fn delete_participant(&self, ctx: &Context<'_>, id: ID) -> Result<Participant> {
        let participant = store(ctx)?
            .participants
            .remove(&id)
            .map_err(|err| err.extend())?;
        info!(participant_id = %id.as_str(), "Participant deleted");
        Ok(participant)
    }

    async fn delete_all_participants(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let count = store(ctx)?
            .participants
            .clear()
            .map_err(|err| err.extend())?;
        info!(count, "All participants deleted");
        Ok(count.into())
    }

    async fn create_event(&self, ctx: &Context<'_>, data: CreateEventInput) -> Result<Event> {
        let event = Event::new(ID(generate_id()), data);
        let event = store(ctx)?.events.append(event).map_err(|err| err.extend())?;
        info!(event_id = %event.id.as_str(), "Event created");
        Ok(event)
    }

    async fn update_event(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateEventInput,
    ) -> Result<Event> {
        let event = store(ctx)?
            .events
            .update(&id, |event| data.apply(event))
            .map_err(|err| err.extend())?;
        info!(event_id = %id.as_str(), "Event updated");
        Ok(event)
    }

    async fn delete_event(&self, ctx: &Context<'_>, id: ID) -> Result<Event> {
        let event = store(ctx)?.events.remove(&id).map_err(|err| err.extend())?;
        info!(event_id = %id.as_str(), "Event deleted");
        Ok(event)
    }

    async fn delete_all_events(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let count = store(ctx)?.events.clear().map_err(|err| err.extend())?;
        info!(count, "All events deleted");
        Ok(count.into())
    }
}
