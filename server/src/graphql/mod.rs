use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema, SimpleObject};

use crate::store::Store;

pub mod mutation;
pub mod query;
pub mod relations;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Result of the `deleteAll*` mutations.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct DeleteAllOutput {
    pub count: i32,
}

impl From<usize> for DeleteAllOutput {
    fn from(count: usize) -> Self {
        Self {
            count: i32::try_from(count).unwrap_or(i32::MAX),
        }
    }
}

pub fn build_schema(store: Arc<Store>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    Ok(ctx.data::<Arc<Store>>()?.as_ref())
}
