// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory directory and wire it into the use case handlers.
// - Expose the HTTP router, the GraphQL schema, and the static front-end.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
