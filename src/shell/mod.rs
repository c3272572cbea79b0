// Composition root for the attendance bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Pick the ledger store adapter and wire it into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
