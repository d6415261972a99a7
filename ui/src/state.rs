use payloads::{ServiceId, responses::Service};
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Every service listing, active or not (managed by use_services).
    pub services: FetchState<Vec<Service>>,
}

impl State {
    pub fn active_services(&self) -> Option<Vec<Service>> {
        self.services.as_ref().map(|services| {
            services.iter().filter(|s| s.is_active).cloned().collect()
        })
    }

    /// Insert or replace a listing after a successful write.
    pub fn upsert_service(&mut self, service: Service) {
        let FetchState::Fetched(services) = &mut self.services else {
            return;
        };
        match services.iter_mut().find(|s| s.id == service.id) {
            Some(existing) => *existing = service,
            None => services.push(service),
        }
    }

    pub fn remove_service(&mut self, service_id: ServiceId) {
        if let FetchState::Fetched(services) = &mut self.services {
            services.retain(|s| s.id != service_id);
        }
    }
}
