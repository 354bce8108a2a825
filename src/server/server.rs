use crate::application_impl::*;
use crate::application_port::*;
use crate::logger::*;
use crate::settings::Settings;
use std::sync::Arc;

/// Owns the services for the lifetime of the process; routes receive them by handle.
pub struct Server {
    pub user_service: Arc<dyn UserService>,
}

impl Server {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let user_service: Arc<dyn UserService> = match settings.user.backend.as_str() {
            "memory" => Arc::new(InMemoryUserService::new()),
            other => return Err(anyhow::anyhow!("Unknown user backend: {}", other)),
        };
        info!(backend = %settings.user.backend, "user service ready");

        Ok(Self { user_service })
    }
}
