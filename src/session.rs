//! Interactive session state and its explicit compute cache.
//!
//! The session owns the current profile value. Profiles are never edited in
//! place: callers build a new value (for example with
//! [`UserProfile::with_quick_fix`]) and pass it to
//! [`Session::update_profile`], which also clears every result derived from
//! the previous profile.
//!
//! # Cache
//!
//! Results are keyed by `(profile_fingerprint, dataset_version, variant_id?)`.
//! Invalidation rules:
//! - a profile change drops every entry of the previous fingerprint;
//! - a lookup against a different dataset version drops entries cached under
//!   any other version.

use crate::catalog::{load_catalog, CatalogData};
use crate::error::Result;
use crate::plan::build_plan;
use crate::profile::{QuickFix, UserProfile};
use crate::recommend::recommend;
use crate::schema::{PlanResult, RecommendationResult};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub profile_fingerprint: String,
    pub dataset_version: String,
    /// Set for plan entries, `None` for recommendation runs.
    pub variant_id: Option<String>,
}

impl CacheKey {
    pub fn new(profile: &UserProfile, catalog: &CatalogData, variant_id: Option<&str>) -> Self {
        Self {
            profile_fingerprint: profile.fingerprint(),
            dataset_version: catalog.meta.dataset_version.clone(),
            variant_id: variant_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Default)]
pub struct ComputeCache {
    recommendations: HashMap<CacheKey, RecommendationResult>,
    plans: HashMap<CacheKey, PlanResult>,
}

impl ComputeCache {
    pub fn len(&self) -> usize {
        self.recommendations.len() + self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry computed for `fingerprint`.
    pub fn invalidate_profile(&mut self, fingerprint: &str) {
        self.recommendations
            .retain(|key, _| key.profile_fingerprint != fingerprint);
        self.plans
            .retain(|key, _| key.profile_fingerprint != fingerprint);
    }

    /// Keep only entries computed against `dataset_version`.
    pub fn retain_dataset(&mut self, dataset_version: &str) {
        self.recommendations
            .retain(|key, _| key.dataset_version == dataset_version);
        self.plans
            .retain(|key, _| key.dataset_version == dataset_version);
    }

    pub fn recommendation(&self, key: &CacheKey) -> Option<&RecommendationResult> {
        self.recommendations.get(key)
    }

    pub fn store_recommendation(&mut self, key: CacheKey, result: RecommendationResult) {
        self.recommendations.insert(key, result);
    }

    pub fn plan(&self, key: &CacheKey) -> Option<&PlanResult> {
        self.plans.get(key)
    }

    pub fn store_plan(&mut self, key: CacheKey, plan: PlanResult) {
        self.plans.insert(key, plan);
    }
}

#[derive(Debug)]
pub struct Session {
    country: String,
    profile: UserProfile,
    profile_ready: bool,
    selected_variant_id: Option<String>,
    recommendation: Option<RecommendationResult>,
    plan: Option<PlanResult>,
    cache: ComputeCache,
}

impl Session {
    /// Start a session with the default draft profile.
    pub fn new(country: &str) -> Self {
        Self {
            country: country.to_string(),
            profile: UserProfile::default(),
            profile_ready: false,
            selected_variant_id: None,
            recommendation: None,
            plan: None,
            cache: ComputeCache::default(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Load the catalog for the session's country.
    pub fn load_catalog(&self, data_dir: Option<&Path>) -> Result<CatalogData> {
        load_catalog(&self.country, data_dir)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// True once a profile has been applied through [`Session::update_profile`].
    pub fn profile_ready(&self) -> bool {
        self.profile_ready
    }

    pub fn selected_variant_id(&self) -> Option<&str> {
        self.selected_variant_id.as_deref()
    }

    pub fn recommendation(&self) -> Option<&RecommendationResult> {
        self.recommendation.as_ref()
    }

    pub fn plan_result(&self) -> Option<&PlanResult> {
        self.plan.as_ref()
    }

    pub fn cache(&self) -> &ComputeCache {
        &self.cache
    }

    /// Replace the profile wholesale and clear derived state.
    pub fn update_profile(&mut self, profile: UserProfile) {
        let previous = self.profile.fingerprint();
        if previous != profile.fingerprint() {
            self.cache.invalidate_profile(&previous);
        }
        self.profile = profile;
        self.profile_ready = true;
        self.selected_variant_id = None;
        self.recommendation = None;
        self.plan = None;
    }

    /// Build a new profile from the current one plus `fixes` and apply it.
    pub fn apply_quick_fixes(&mut self, fixes: &[QuickFix]) {
        if fixes.is_empty() {
            return;
        }
        let next = self.profile.with_quick_fixes(fixes);
        tracing::debug!(count = fixes.len(), "applying quick fixes");
        self.update_profile(next);
    }

    pub fn select_variant(&mut self, variant_id: &str) {
        self.selected_variant_id = Some(variant_id.to_string());
        self.plan = None;
    }

    /// Run recommendations for the current profile, reusing a cached result.
    pub fn recommend(&mut self, catalog: &CatalogData) -> &RecommendationResult {
        self.cache.retain_dataset(&catalog.meta.dataset_version);
        let key = CacheKey::new(&self.profile, catalog, None);
        let result = match self.cache.recommendation(&key) {
            Some(cached) => {
                tracing::debug!("recommendation cache hit");
                cached.clone()
            }
            None => {
                tracing::debug!("recommendation cache miss");
                let fresh = recommend(&self.profile, catalog);
                self.cache.store_recommendation(key, fresh.clone());
                fresh
            }
        };
        self.recommendation.insert(result)
    }

    /// Build the plan for `variant_id`, reusing a cached plan.
    ///
    /// The variant becomes the session's selection on success.
    pub fn plan(&mut self, catalog: &CatalogData, variant_id: &str) -> Result<&PlanResult> {
        self.cache.retain_dataset(&catalog.meta.dataset_version);
        let key = CacheKey::new(&self.profile, catalog, Some(variant_id));
        let plan = match self.cache.plan(&key) {
            Some(cached) => {
                tracing::debug!(variant_id, "plan cache hit");
                cached.clone()
            }
            None => {
                tracing::debug!(variant_id, "plan cache miss");
                let fresh = build_plan(&self.profile, catalog, variant_id)?;
                self.cache.store_plan(key, fresh.clone());
                fresh
            }
        };
        self.selected_variant_id = Some(variant_id.to_string());
        Ok(&*self.plan.insert(plan))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
