//! Commentary Module
//!
//! Timestamped free-text annotations attached to a match. Entries are
//! created once and listed newest-first; there is no update or delete
//! surface. The `matches` foreign key is enforced by the store, and an
//! insert rejected on that constraint surfaces to callers as a 400.
//!
//! # Usage
//!
//! ```rust,ignore
//! use touchline::commentary;
//!
//! // Get the migrations to run
//! for (name, sql) in commentary::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes under the match scope
//! let app = Router::new()
//!     .nest("/matches/:id/commentary", commentary::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;
mod store;
pub mod validation;

pub use routes::routes;
pub use store::{Commentary, CommentaryStore, CreateCommentary};

pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "commentary_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
