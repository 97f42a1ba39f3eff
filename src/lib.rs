//! # Ensaluti
//!
//! `ensaluti` is a minimal credential registration and login service. It
//! accepts `username`/`password` pairs over form-encoded `POST` requests,
//! checks or records them against a flat-file JSON store, and answers with a
//! plain-text outcome message.
//!
//! - `POST /register` appends a new record to the store, rejecting duplicate
//!   usernames.
//! - `POST /login` matches the submitted pair against the store with
//!   case-sensitive string equality.
//! - Any non-POST request gets a fixed placeholder response.
//!
//! The store is a single JSON array of records, read in full on every request
//! and rewritten in full on registration. A single-writer lock serialises
//! mutations so concurrent registrations cannot lose updates.

pub mod cli;
pub mod ensaluti;
pub mod store;
