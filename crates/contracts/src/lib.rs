//! Shared types and pure logic of the store front-end.
//!
//! Everything here compiles natively so it can be unit tested without a
//! browser; the `frontend` crate only adds HTTP calls and views.

pub mod domain;
pub mod shared;
pub mod system;
