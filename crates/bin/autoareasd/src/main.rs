//! # autoareasd — autoarea daemon
//!
//! Composition root that wires the adapters together and runs the area
//! controllers.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Build the in-memory host from the configured registry snapshot
//! - Set up one area controller per configured area
//! - Defer controller initialization until the host reports it is started
//! - Tear every controller down on SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It only wires things together; area logic lives in `autoarea-app`.

mod config;

use std::sync::Arc;

use autoarea_adapter_memory::InMemoryHost;
use autoarea_app::manager::AreaManager;
use autoarea_app::ports::HostContext;
use autoarea_app::services::resolver::ABSENT_AREA_ID;
use autoarea_app::startup::StartupSignal;
use autoarea_domain::id::AreaId;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Device classes reported at startup as presence sensors.
const PRESENCE_DEVICE_CLASSES: &[&str] = &["motion", "occupancy", "presence"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let relevant_domains = config.relevant_domains()?;
    let area_ids = config.area_ids();

    // Host
    let host = Arc::new(InMemoryHost::from_snapshot(config.registry)?);

    // Areas
    let mut manager = AreaManager::setup(&host, area_ids, relevant_domains)?;

    // Deferred start: a real host fires this signal itself. The in-memory
    // host counts as started once every area has been set up against it.
    let startup = StartupSignal::new();
    let area_count = manager.len();
    let deferred = {
        let startup = startup.clone();
        tokio::spawn(async move {
            let initialized = manager.run_after_start(&startup).await;
            info!(initialized, "areas initialized");
            manager
        })
    };
    info!(
        areas = area_count,
        issues = host.issues().len(),
        "host started"
    );
    startup.notify_started();
    let mut manager = deferred.await?;

    for area in manager.areas() {
        let entities = area.valid_entities();
        let presence = area.entity_ids_by_device_class(PRESENCE_DEVICE_CLASSES);
        let device = serde_json::to_string(&area.device_info())?;
        info!(
            area_id = area.area_id().map_or(ABSENT_AREA_ID, AreaId::as_str),
            area = area.area_name(),
            slug = %area.slugified_area_name(),
            entities = entities.len(),
            presence_sensors = presence.len(),
            %device,
            "area ready"
        );
    }

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    manager.teardown();

    Ok(())
}
