//! Integration tests for the AccessHub HTTP API.

mod access_api;
mod helpers;
mod role_api;
mod user_api;
