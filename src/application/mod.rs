// Application layer - Use cases and the repository seam
pub mod company_repository;
pub mod company_service;
