use contracts::domain::a001_store::Coordinates;
use contracts::domain::a003_delivery::{
    AssignDeliveryRequest, Delivery, DeliveryPerson, DeliveryPersonPatch, NewDeliveryPerson,
    PriorityFilter,
};
use contracts::shared::error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_delivery::{api, geolocation};
use crate::shared::config::AppConfig;

#[derive(Clone, Copy)]
pub struct DeliveriesViewModel {
    pub deliveries: RwSignal<Vec<Delivery>>,
    pub driver: RwSignal<Option<DeliveryPerson>>,
    pub position: RwSignal<Option<Coordinates>>,
    pub filter: RwSignal<PriorityFilter>,
    pub loading: RwSignal<bool>,
    pub locating: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl DeliveriesViewModel {
    pub fn new() -> Self {
        Self {
            deliveries: RwSignal::new(Vec::new()),
            driver: RwSignal::new(None),
            position: RwSignal::new(None),
            filter: RwSignal::new(PriorityFilter::All),
            loading: RwSignal::new(true),
            locating: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Log a failed remote call and show it inline
    fn report(&self, action: &str, e: &ApiError) {
        log::error!("Error {}: {}", action, e);
        self.error.set(Some(e.user_message()));
    }

    /// Load the driver record, then the open deliveries
    pub fn load(&self, config: AppConfig, email: String) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_driver(&config.api, &email).await {
                Ok(Some(driver)) => {
                    vm.position.set(driver.position());
                    vm.driver.set(Some(driver));
                }
                Ok(None) => log::info!("No driver record for {}", email),
                Err(e) => log::error!("Error loading delivery person data: {}", e),
            }
            vm.refresh(&config).await;
            vm.loading.set(false);
        });
    }

    async fn refresh(&self, config: &AppConfig) {
        match api::fetch_available(&config.api).await {
            Ok(deliveries) => {
                log::debug!("Loaded {} available deliveries", deliveries.len());
                self.deliveries.set(deliveries);
                self.error.set(None);
            }
            Err(e) => self.report("loading deliveries", &e),
        }
    }

    /// Take a position fix and store it on the driver record, creating the
    /// record on the first fix
    pub fn locate(&self, config: AppConfig, email: String) {
        if self.locating.get_untracked() {
            return;
        }
        let vm = *self;
        vm.locating.set(true);
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(position) => {
                    vm.position.set(Some(position));
                    if let Err(e) = vm.store_position(&config, &email, position).await {
                        vm.report("saving driver location", &e);
                    }
                }
                Err(e) => {
                    log::warn!("{}", e);
                    vm.error.set(Some(e));
                }
            }
            vm.locating.set(false);
        });
    }

    async fn store_position(
        &self,
        config: &AppConfig,
        email: &str,
        position: Coordinates,
    ) -> Result<(), ApiError> {
        match self.driver.get_untracked() {
            Some(driver) => {
                api::update_driver(&config.api, &driver.id, &DeliveryPersonPatch::moved_to(position))
                    .await?;
                self.driver.update(|d| {
                    if let Some(d) = d {
                        d.current_lat = Some(position.lat);
                        d.current_lng = Some(position.lng);
                    }
                });
            }
            None => {
                let new_driver = NewDeliveryPerson {
                    current_lat: position.lat,
                    current_lng: position.lng,
                    phone: email.to_string(),
                    vehicle_type: NewDeliveryPerson::DEFAULT_VEHICLE.to_string(),
                    created_by: email.to_string(),
                };
                let created = api::create_driver(&config.api, &new_driver).await?;
                log::info!("Created driver record {}", created.id);
                self.driver.set(Some(created));
            }
        }
        Ok(())
    }

    /// Assign the delivery to the signed-in driver and reload the list
    pub fn accept(&self, config: AppConfig, email: String, delivery_id: String) {
        let vm = *self;
        spawn_local(async move {
            if let Err(e) = vm.take(&config, &email, &delivery_id).await {
                vm.report(&format!("accepting delivery {}", delivery_id), &e);
                return;
            }
            log::info!("Delivery {} assigned to {}", delivery_id, email);
            vm.refresh(&config).await;
        });
    }

    async fn take(&self, config: &AppConfig, email: &str, delivery_id: &str) -> Result<(), ApiError> {
        api::assign(&config.api, delivery_id, &AssignDeliveryRequest::to(email)).await?;

        if let Some(driver) = self.driver.get_untracked() {
            let patch = DeliveryPersonPatch::accepting(&driver, delivery_id);
            api::update_driver(&config.api, &driver.id, &patch).await?;
            if let Some(active) = patch.active_deliveries {
                self.driver.update(|d| {
                    if let Some(d) = d {
                        d.active_deliveries = active;
                    }
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_failed_location_save_is_shown() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = DeliveriesViewModel::new();
            vm.report("saving driver location", &ApiError::status(502, "bad gateway"));
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("The server is unavailable, please try again.")
            );

            vm.report("saving driver location", &ApiError::Transport("offline".into()));
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Network error, please try again.")
            );
        });
    }
}
