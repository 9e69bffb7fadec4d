//! Game library API - backend for a multi-user game collection
//!
//! This crate provides the REST API behind the game library frontend:
//! - User registration, profile updates, deletion and login
//! - A per-user library of game records with ownership checks

pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;
pub mod state;
