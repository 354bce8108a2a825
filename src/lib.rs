pub mod api;
pub mod logger;
pub mod settings;

pub mod server;

pub mod application_impl;
pub mod application_port;
pub mod convert;
pub mod domain_model;
