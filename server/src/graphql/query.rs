use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::graphql::store;
use crate::models::{Event, Location, Participant, User};

pub struct QueryRoot;

/// Single-record lookups resolve to `null` when the id has no match.
#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        store(ctx)?.users.all().map_err(|err| err.extend())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        store(ctx)?.users.find_by_id(&id).map_err(|err| err.extend())
    }

    async fn locations(&self, ctx: &Context<'_>) -> Result<Vec<Location>> {
        store(ctx)?.locations.all().map_err(|err| err.extend())
    }

    async fn location(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Location>> {
        store(ctx)?
            .locations
            .find_by_id(&id)
            .map_err(|err| err.extend())
    }

    async fn participants(&self, ctx: &Context<'_>) -> Result<Vec<Participant>> {
        store(ctx)?.participants.all().map_err(|err| err.extend())
    }

    async fn participant(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Participant>> {
        store(ctx)?
            .participants
            .find_by_id(&id)
            .map_err(|err| err.extend())
    }

    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        store(ctx)?.events.all().map_err(|err| err.extend())
    }

    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Event>> {
        store(ctx)?.events.find_by_id(&id).map_err(|err| err.extend())
    }
}
