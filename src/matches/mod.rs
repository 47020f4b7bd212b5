//! Match Registry Module
//!
//! Owns the `matches` table that commentary entries reference. Matches are
//! created once and read back; there is no mutation surface.

mod handler;
mod routes;
mod store;
pub mod validation;

pub use routes::routes;
pub use store::{CreateMatch, Match, MatchStore};

pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "matches_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
