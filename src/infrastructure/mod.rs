// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod decoder;
pub mod simco_repository;
