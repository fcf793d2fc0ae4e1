//! Area manager — creates one [`AutoArea`] per configured area and drives
//! their shared lifecycle.
//!
//! Construction (and therefore area resolution) happens at setup time.
//! Initialization is deferred until the host reports it is fully started;
//! teardown cleans every controller up.

use std::sync::Arc;

use autoarea_domain::domains::RelevantDomains;
use autoarea_domain::error::{AutoAreaError, ConfigurationError};
use autoarea_domain::id::AreaId;
use indexmap::IndexMap;
use tracing::info;

use crate::ports::HostContext;
use crate::services::auto_area::AutoArea;
use crate::startup::StartupSignal;

/// Owns the controllers of every configured area, keyed by area id.
pub struct AreaManager<H> {
    areas: IndexMap<AreaId, AutoArea<H>>,
}

impl<H: HostContext + Clone> AreaManager<H> {
    /// Build a controller for each of `area_ids`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Configuration`] when an area id appears more
    /// than once. No controller is kept in that case.
    #[tracing::instrument(skip_all)]
    pub fn setup<I>(
        host: &H,
        area_ids: I,
        relevant_domains: RelevantDomains,
    ) -> Result<Self, AutoAreaError>
    where
        I: IntoIterator<Item = AreaId>,
    {
        let relevant_domains = Arc::new(relevant_domains);
        let mut areas = IndexMap::new();
        for area_id in area_ids {
            if areas.contains_key(&area_id) {
                return Err(ConfigurationError::DuplicateArea(area_id).into());
            }
            let area = AutoArea::new(
                host.clone(),
                Some(area_id.clone()),
                Arc::clone(&relevant_domains),
            );
            areas.insert(area_id, area);
        }
        info!(count = areas.len(), "areas set up");
        Ok(Self { areas })
    }
}

impl<H: HostContext> AreaManager<H> {
    /// Wait for the host to be fully started, then initialize every area.
    ///
    /// Returns how many areas were initialized.
    pub async fn run_after_start(&mut self, signal: &StartupSignal) -> usize {
        signal.wait_started().await;
        self.initialize_all()
    }

    /// Initialize every area now. Unresolved areas are skipped.
    pub fn initialize_all(&mut self) -> usize {
        let initialized = self
            .areas
            .values_mut()
            .map(AutoArea::initialize)
            .filter(|initialized| *initialized)
            .count();
        info!(
            initialized,
            total = self.areas.len(),
            "areas initialized after host start"
        );
        initialized
    }

    /// Clean up every area. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        for area in self.areas.values_mut() {
            area.cleanup();
        }
    }

    #[must_use]
    pub fn get(&self, area_id: &AreaId) -> Option<&AutoArea<H>> {
        self.areas.get(area_id)
    }

    pub fn get_mut(&mut self, area_id: &AreaId) -> Option<&mut AutoArea<H>> {
        self.areas.get_mut(area_id)
    }

    /// Controllers in configuration order.
    pub fn areas(&self) -> impl Iterator<Item = &AutoArea<H>> {
        self.areas.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auto_area::Lifecycle;
    use crate::testing::{CountingController, FakeHost};
    use std::sync::atomic::Ordering;

    fn host() -> Arc<FakeHost> {
        let host = Arc::new(FakeHost::default());
        host.add_area("kitchen", "Kitchen");
        host.add_area("living", "Living Room");
        host
    }

    fn ids(ids: &[&str]) -> Vec<AreaId> {
        ids.iter().copied().map(AreaId::from).collect()
    }

    #[test]
    fn should_create_one_controller_per_area_in_order() {
        let manager =
            AreaManager::setup(&host(), ids(&["living", "kitchen"]), RelevantDomains::default())
                .unwrap();

        let names: Vec<&str> = manager.areas().map(AutoArea::area_name).collect();
        assert_eq!(names, vec!["Living Room", "Kitchen"]);
    }

    #[test]
    fn should_reject_duplicate_area() {
        let result = AreaManager::setup(
            &host(),
            ids(&["kitchen", "kitchen"]),
            RelevantDomains::default(),
        );
        assert!(matches!(
            result,
            Err(AutoAreaError::Configuration(ConfigurationError::DuplicateArea(id))) if id.as_str() == "kitchen"
        ));
    }

    #[test]
    fn should_keep_unresolved_areas_with_one_issue() {
        let host = host();
        let manager =
            AreaManager::setup(&host, ids(&["kitchen", "attic"]), RelevantDomains::default())
                .unwrap();

        let attic = manager.get(&AreaId::from("attic")).unwrap();
        assert_eq!(attic.area_name(), "unknown");
        assert_eq!(host.reported_issues().len(), 1);
    }

    #[tokio::test]
    async fn should_initialize_only_after_start() {
        let host = host();
        let mut manager =
            AreaManager::setup(&host, ids(&["kitchen", "attic"]), RelevantDomains::default())
                .unwrap();
        let signal = StartupSignal::new();

        let task = {
            let signal = signal.clone();
            tokio::spawn(async move {
                let initialized = manager.run_after_start(&signal).await;
                (manager, initialized)
            })
        };
        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        signal.notify_started();
        let (manager, initialized) = task.await.unwrap();

        assert_eq!(initialized, 1);
        let kitchen = manager.get(&AreaId::from("kitchen")).unwrap();
        assert_eq!(kitchen.lifecycle(), Lifecycle::Initialized);
    }

    #[test]
    fn should_teardown_every_area_once() {
        let mut manager =
            AreaManager::setup(&host(), ids(&["kitchen", "living"]), RelevantDomains::default())
                .unwrap();
        let (controller, cleanups) = CountingController::new(false);
        manager
            .get_mut(&AreaId::from("kitchen"))
            .unwrap()
            .attach_controller(Box::new(controller));

        manager.teardown();
        manager.teardown();

        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
        assert!(manager
            .areas()
            .all(|area| area.lifecycle() == Lifecycle::CleanedUp));
    }

    #[test]
    fn should_accept_empty_area_list() {
        let manager =
            AreaManager::setup(&host(), Vec::new(), RelevantDomains::default()).unwrap();
        assert!(manager.is_empty());
    }
}
