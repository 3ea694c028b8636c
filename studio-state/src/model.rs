pub mod contact;
pub mod gallery;
pub mod section;
pub mod service;
pub mod team;
