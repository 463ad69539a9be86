//! # Listing Service
//!
//! The operations exposed to the HTTP layer: search, lookup, create,
//! replace, space search and space statistics.
//!
//! Writes are validated before they reach the store. Every operation logs
//! one event and bumps its counter; store failures are logged and passed
//! up unchanged.

mod errors;

use std::sync::Arc;

pub use errors::{ServiceError, ServiceResult};

use crate::model::{CreatePropertyRequest, PropertyView, SearchPage, SpaceStats, SpaceView};
use crate::observability::{log_event_with_fields, Event, Logger, MetricsRegistry};
use crate::query::{PropertyQuery, SpaceQuery};
use crate::store::{ListingStore, StoreError};
use crate::validation::PropertyValidator;

/// Stateless front for a listing store
pub struct ListingService<S: ListingStore> {
    store: S,
    metrics: Arc<MetricsRegistry>,
}

impl<S: ListingStore> ListingService<S> {
    pub fn new(store: S) -> Self {
        Self::with_metrics(store, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(store: S, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// `searchProperties(filters, sort, page, limit)`
    pub fn search_properties(
        &self,
        query: &PropertyQuery,
    ) -> ServiceResult<SearchPage<PropertyView>> {
        let page = self
            .store
            .search_properties(query)
            .map_err(|e| self.store_failure("search_properties", e))?;

        self.metrics.increment_property_searches();
        log_event_with_fields(
            Event::PropertySearch,
            &[
                ("total", page.total.to_string().as_str()),
                ("returned", page.items.len().to_string().as_str()),
                ("page", query.pagination.page().to_string().as_str()),
            ],
        );
        Ok(page)
    }

    /// `getProperty(id)`
    pub fn get_property(&self, id: i64) -> ServiceResult<PropertyView> {
        self.metrics.increment_property_lookups();

        match self.store.get_property(id) {
            Ok(Some(property)) => Ok(property),
            Ok(None) => {
                self.metrics.increment_lookups_not_found();
                Err(ServiceError::NotFound(id))
            }
            Err(e) => Err(self.store_failure("get_property", e)),
        }
    }

    /// `createProperty(request)`. Returns the new property id.
    pub fn create_property(&self, request: &CreatePropertyRequest) -> ServiceResult<i64> {
        let property = PropertyValidator::validate(request).map_err(|e| {
            self.metrics.increment_validation_rejections();
            Logger::warn(
                Event::PropertyRejected.as_str(),
                &[("field", e.field()), ("reason", e.to_string().as_str())],
            );
            e
        })?;

        let id = self
            .store
            .insert_property(&property)
            .map_err(|e| self.store_failure("insert_property", e))?;

        self.metrics.increment_properties_created();
        log_event_with_fields(
            Event::PropertyCreated,
            &[
                ("id", id.to_string().as_str()),
                ("spaces", property.spaces.len().to_string().as_str()),
            ],
        );
        Ok(id)
    }

    /// Replace every field and the whole space collection of a property.
    pub fn replace_property(&self, id: i64, request: &CreatePropertyRequest) -> ServiceResult<()> {
        let property = PropertyValidator::validate(request).map_err(|e| {
            self.metrics.increment_validation_rejections();
            Logger::warn(
                Event::PropertyRejected.as_str(),
                &[
                    ("field", e.field()),
                    ("id", id.to_string().as_str()),
                    ("reason", e.to_string().as_str()),
                ],
            );
            e
        })?;

        let replaced = self
            .store
            .replace_property(id, &property)
            .map_err(|e| self.store_failure("replace_property", e))?;
        if !replaced {
            self.metrics.increment_lookups_not_found();
            return Err(ServiceError::NotFound(id));
        }

        self.metrics.increment_properties_replaced();
        log_event_with_fields(
            Event::PropertyReplaced,
            &[
                ("id", id.to_string().as_str()),
                ("spaces", property.spaces.len().to_string().as_str()),
            ],
        );
        Ok(())
    }

    /// `searchSpaces(filters, page, limit)`
    pub fn search_spaces(&self, query: &SpaceQuery) -> ServiceResult<SearchPage<SpaceView>> {
        let page = self
            .store
            .search_spaces(query)
            .map_err(|e| self.store_failure("search_spaces", e))?;

        self.metrics.increment_space_searches();
        log_event_with_fields(
            Event::SpaceSearch,
            &[
                ("total", page.total.to_string().as_str()),
                ("returned", page.items.len().to_string().as_str()),
            ],
        );
        Ok(page)
    }

    /// `spaceStats()`. `overall` is `None` when no spaces exist.
    pub fn space_stats(&self) -> ServiceResult<SpaceStats> {
        let stats = self
            .store
            .space_stats()
            .map_err(|e| self.store_failure("space_stats", e))?;

        self.metrics.increment_stats_computed();
        log_event_with_fields(
            Event::SpaceStats,
            &[("properties", stats.per_property.len().to_string().as_str())],
        );
        Ok(stats)
    }

    fn store_failure(&self, operation: &str, err: StoreError) -> ServiceError {
        self.metrics.increment_store_failures();
        Logger::error(
            Event::StoreFailure.as_str(),
            &[("error", err.to_string().as_str()), ("operation", operation)],
        );
        ServiceError::Store(err)
    }
}
