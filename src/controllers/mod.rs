//! Core state controllers: collection, selection, and edit workflow.

pub mod collection_controller;
pub mod edit_session;
pub mod selection_model;
