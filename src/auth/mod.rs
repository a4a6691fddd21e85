/*
[INPUT]:  Credential storage configuration
[OUTPUT]: Stored authorization tokens
[POS]:    Auth layer - credential persistence
[UPDATE]: When credential storage strategy changes
*/

pub mod token_store;

pub use token_store::TokenStore;
