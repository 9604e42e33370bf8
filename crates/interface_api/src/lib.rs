//! HTTP API Layer
//!
//! REST API for the clubs system using Axum: country and province
//! maintenance, name & address records that are normalized and validated
//! before they are stored, the instrument and style catalog, and artists
//! with their group memberships.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::in_memory(config).await;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod seed;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::HealthCheckable;
use domain_artists::{ArtistPort, ArtistService, GroupMemberPort, MockArtistPort};
use domain_catalog::{CatalogService, InstrumentPort, MockCatalogPort, StylePort};
use domain_contacts::{MockNameAddressPort, NameAddressPort, NameAddressService};
use domain_reference::{CountryLookup, CountryPort, MockReferencePort, ProvinceLookup, ProvincePort, ReferenceDataService};

use crate::config::ApiConfig;
use crate::middleware::request_logging;
use crate::handlers::{artists, countries, health, instruments, name_addresses, provinces, styles};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub reference: ReferenceDataService,
    pub contacts: NameAddressService,
    pub catalog: CatalogService,
    pub artists: ArtistService,
    /// Adapters polled by the readiness check
    pub health: Vec<Arc<dyn HealthCheckable>>,
}

/// The adapters behind every port
pub struct Adapters<R, N, C, A> {
    pub reference: Arc<R>,
    pub records: Arc<N>,
    pub catalog: Arc<C>,
    pub artists: Arc<A>,
}

impl AppState {
    /// Wires the services over one adapter per domain
    pub fn new<R, N, C, A>(config: ApiConfig, adapters: Adapters<R, N, C, A>) -> Self
    where
        R: CountryPort + ProvincePort,
        N: NameAddressPort,
        C: InstrumentPort + StylePort,
        A: ArtistPort + GroupMemberPort,
    {
        let Adapters {
            reference,
            records,
            catalog,
            artists,
        } = adapters;

        let countries: Arc<dyn CountryPort> = reference.clone();
        let provinces: Arc<dyn ProvincePort> = reference.clone();
        let province_lookup: Arc<dyn ProvinceLookup> = reference.clone();
        let country_lookup: Arc<dyn CountryLookup> = reference.clone();
        let record_store: Arc<dyn NameAddressPort> = records.clone();
        let instrument_store: Arc<dyn InstrumentPort> = catalog.clone();
        let style_store: Arc<dyn StylePort> = catalog.clone();
        let artist_store: Arc<dyn ArtistPort> = artists.clone();
        let member_store: Arc<dyn GroupMemberPort> = artists.clone();
        let reference_health: Arc<dyn HealthCheckable> = reference;
        let records_health: Arc<dyn HealthCheckable> = records;
        let catalog_health: Arc<dyn HealthCheckable> = catalog;
        let artists_health: Arc<dyn HealthCheckable> = artists;

        Self {
            config,
            reference: ReferenceDataService::new(countries, provinces),
            contacts: NameAddressService::new(record_store.clone(), province_lookup, country_lookup),
            catalog: CatalogService::new(instrument_store, style_store),
            artists: ArtistService::new(artist_store, member_store, record_store),
            health: vec![reference_health, records_health, catalog_health, artists_health],
        }
    }

    /// State backed by in-memory adapters seeded with North American
    /// reference data and a starter catalog
    pub async fn in_memory(config: ApiConfig) -> Self {
        let (countries, provinces) = seed::reference_data();
        let (instruments, styles) = seed::catalog();
        let adapters = Adapters {
            reference: Arc::new(MockReferencePort::with_data(countries, provinces).await),
            records: Arc::new(MockNameAddressPort::new()),
            catalog: Arc::new(MockCatalogPort::with_data(instruments, styles).await),
            artists: Arc::new(MockArtistPort::new()),
        };
        Self::new(config, adapters)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Services and configuration shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let country_routes = Router::new()
        .route("/", get(countries::list_countries).post(countries::create_country))
        .route(
            "/:code",
            get(countries::get_country)
                .put(countries::update_country)
                .delete(countries::delete_country),
        )
        .route("/:code/provinces", get(countries::list_provinces));

    let province_routes = Router::new()
        .route("/", post(provinces::create_province))
        .route(
            "/:code",
            get(provinces::get_province)
                .put(provinces::update_province)
                .delete(provinces::delete_province),
        );

    let name_address_routes = Router::new()
        .route(
            "/",
            get(name_addresses::list_name_addresses).post(name_addresses::create_name_address),
        )
        .route(
            "/:id",
            get(name_addresses::get_name_address)
                .put(name_addresses::update_name_address)
                .delete(name_addresses::delete_name_address),
        );

    let instrument_routes = Router::new()
        .route("/", get(instruments::list_instruments).post(instruments::create_instrument))
        .route(
            "/:id",
            get(instruments::get_instrument)
                .put(instruments::update_instrument)
                .delete(instruments::delete_instrument),
        );

    let style_routes = Router::new()
        .route("/", get(styles::list_styles).post(styles::create_style))
        .route(
            "/:name",
            get(styles::get_style)
                .put(styles::update_style)
                .delete(styles::delete_style),
        );

    let artist_routes = Router::new()
        .route("/", get(artists::list_artists).post(artists::create_artist))
        .route(
            "/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route(
            "/:id/group-members",
            get(artists::list_group_members).post(artists::add_group_member),
        )
        .route("/:id/group-members/candidates", get(artists::list_candidates))
        .route(
            "/:id/group-members/:member_id",
            get(artists::get_group_member)
                .put(artists::update_group_member)
                .delete(artists::remove_group_member),
        );

    let api_routes = Router::new()
        .nest("/countries", country_routes)
        .nest("/provinces", province_routes)
        .nest("/name-addresses", name_address_routes)
        .nest("/instruments", instrument_routes)
        .nest("/styles", style_routes)
        .nest("/artists", artist_routes)
        .layer(axum_middleware::from_fn(request_logging));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
