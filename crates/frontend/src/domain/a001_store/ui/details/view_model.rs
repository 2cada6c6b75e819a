use super::model;
use contracts::domain::a001_store::{StoreAddress, StoreHours, StoreInfo, Weekday};
use contracts::shared::error::ApiError;
use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;

/// ViewModel for the store profile form
#[derive(Clone, Copy)]
pub struct StoreDetailsViewModel {
    /// Last row loaded from (or saved to) the backend
    pub store: RwSignal<Option<StoreInfo>>,
    pub address: RwSignal<StoreAddress>,
    pub hours: RwSignal<StoreHours>,
    pub editing: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl StoreDetailsViewModel {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(None),
            address: RwSignal::new(StoreAddress::default()),
            hours: RwSignal::new(StoreHours::all_closed()),
            editing: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Copy the stored row back into the form fields
    pub fn reset_form(&self) {
        if let Some(store) = self.store.get_untracked() {
            self.address.set(store.address());
            self.hours.set(store.hours());
        }
    }

    pub fn load(&self, config: AppConfig, session: &StoreSession) {
        let vm = *self;
        let store_id = session.store_id().to_string();
        spawn_local(async move {
            match model::fetch_store(&config, &store_id).await {
                Ok(store) => {
                    vm.store.set(Some(store));
                    vm.reset_form();
                    vm.error.set(None);
                }
                Err(e) => {
                    log::error!("Fetch store {} failed: {}", store_id, e);
                    vm.error.set(Some(e.user_message()));
                }
            }
        });
    }

    pub fn start_edit(&self) {
        self.reset_form();
        self.editing.set(true);
    }

    pub fn cancel_edit(&self) {
        self.reset_form();
        self.editing.set(false);
    }

    pub fn set_open(&self, day: Weekday, time: String) {
        self.hours.update(|h| h.set_open_time(day, time));
    }

    pub fn set_close(&self, day: Weekday, time: String) {
        self.hours.update(|h| h.set_close_time(day, time));
    }

    pub fn set_closed(&self, day: Weekday, closed: bool) {
        self.hours.update(|h| h.set_closed(day, closed));
    }

    /// Geocode, validate and save; failures are shown as an alert
    pub fn save_command(&self, config: AppConfig, session: &StoreSession) {
        if self.saving.get_untracked() {
            return;
        }
        let vm = *self;
        let store_id = session.store_id().to_string();
        let address = self.address.get_untracked();
        let hours = self.hours.get_untracked();

        vm.saving.set(true);
        spawn_local(async move {
            match model::save_store(&config, &store_id, &address, &hours).await {
                Ok(request) => {
                    log::info!("Store {} updated: {}", store_id, request.location);
                    vm.store.update(|store| {
                        if let Some(store) = store {
                            store.apply_update(&request);
                        }
                    });
                    vm.error.set(None);
                    vm.editing.set(false);
                }
                Err(e) => {
                    log::error!("Error updating store info: {}", e);
                    let message = match &e {
                        ApiError::Validation(msg) => msg.clone(),
                        _ => "Failed to update store info. Please try again.".to_string(),
                    };
                    alert(&message);
                    vm.error.set(Some(e.user_message()));
                }
            }
            vm.saving.set(false);
        });
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
