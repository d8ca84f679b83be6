//! Library crate for ramble-back: the round and quiz engine behind the Ramble
//! event app, exposed to the binary and integration tests.

pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
