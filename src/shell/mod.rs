// Composition root for the client data layer.
//
// Responsibilities:
// - Instantiate concrete remote adapters.
// - Wire adapters into stores and stores into use case handlers.
//
// Every collaborator is passed in explicitly; nothing here is a global.

pub mod stores;
