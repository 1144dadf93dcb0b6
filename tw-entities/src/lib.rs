//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # tw-entities
//!
//! Reusable, agnostic domain entities for TripWeaver.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod address;
pub mod category;
pub mod email;
pub mod geo;
pub mod id;
pub mod identity;
pub mod itinerary;
pub mod nonce;
pub mod password;
pub mod place;
pub mod preference;
pub mod time;
pub mod trip;
pub mod trip_place;
pub mod user;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
