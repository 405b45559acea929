//! Profile persistence over an injected key-value store.
//!
//! The engine never touches storage itself; embedders hand a
//! [`KeyValueStore`] capability (browser local storage, a file, a test
//! map) to a [`ProfileStore`], which keeps labelled worker and company
//! profiles as JSON lists under fixed keys. Semantics are deliberately
//! forgiving: last write wins, and a corrupt stored list reads back as
//! empty rather than failing.

use std::collections::HashMap;

use chrono::Local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompanyProfile, CompanyProfileData, PayslipForm, WorkerProfile, WorkerProfileData,
};

/// Storage key for the worker profile list.
pub const WORKER_PROFILE_KEY: &str = "payslip_worker_profiles_v1";

/// Storage key for the company profile list.
pub const COMPANY_PROFILE_KEY: &str = "payslip_company_profiles_v1";

/// A minimal key-value storage capability.
///
/// Mirrors the `getItem`/`setItem` surface of browser local storage; the
/// only guarantee implementations must provide is last-write-wins.
pub trait KeyValueStore {
    /// Returns the stored value for a key, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// An in-memory [`KeyValueStore`] for tests and embedders without real
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Manages saved worker and company profiles over a [`KeyValueStore`].
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayslipForm;
/// use payslip_engine::store::{MemoryStore, ProfileStore};
///
/// let mut profiles = ProfileStore::new(MemoryStore::new());
/// let mut form = PayslipForm::default();
/// form.worker_name = "김철수".to_string();
///
/// let saved = profiles.save_worker_profile(&form, None).unwrap();
/// assert_eq!(profiles.worker_profiles().len(), 1);
/// let loaded = profiles.load_worker_profile(saved.id).unwrap();
/// assert_eq!(loaded.data.worker_name, "김철수");
/// ```
#[derive(Debug)]
pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        ProfileStore { store }
    }

    /// Consumes the profile store and returns the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns the saved worker profiles, most recently saved first.
    ///
    /// A missing or corrupt stored list reads back as empty.
    pub fn worker_profiles(&self) -> Vec<WorkerProfile> {
        self.read_list(WORKER_PROFILE_KEY)
    }

    /// Returns the saved company profiles, most recently saved first.
    ///
    /// A missing or corrupt stored list reads back as empty.
    pub fn company_profiles(&self) -> Vec<CompanyProfile> {
        self.read_list(COMPANY_PROFILE_KEY)
    }

    /// Saves the worker-side fields of a form as a new profile.
    ///
    /// The label defaults to `{worker name}_{pay date}` when not supplied
    /// or blank. Every save creates a fresh entry with a new id, prepended
    /// to the list; duplicate labels are allowed.
    pub fn save_worker_profile(
        &mut self,
        form: &PayslipForm,
        label: Option<&str>,
    ) -> EngineResult<WorkerProfile> {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let label = match label.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => form.worker_profile_label(&today),
        };

        let profile = WorkerProfile {
            id: Uuid::new_v4(),
            label,
            data: WorkerProfileData::from_form(form),
        };

        let mut profiles = self.worker_profiles();
        profiles.insert(0, profile.clone());
        self.write_list(WORKER_PROFILE_KEY, &profiles)?;

        debug!(id = %profile.id, label = %profile.label, "Saved worker profile");
        Ok(profile)
    }

    /// Saves the company fields of a form as a profile.
    ///
    /// Requires a non-blank company name and registration number. The
    /// registration number is the profile id: saving with an already
    /// stored number replaces that entry, otherwise the profile is
    /// prepended. The label defaults to the company name.
    pub fn save_company_profile(
        &mut self,
        form: &PayslipForm,
        label: Option<&str>,
    ) -> EngineResult<CompanyProfile> {
        let reg_no = form.company_reg_no.trim();
        if form.company_name.trim().is_empty() {
            return Err(EngineError::MissingCompanyName);
        }
        if reg_no.is_empty() {
            return Err(EngineError::MissingCompanyRegNo);
        }

        let label = match label.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => form.company_profile_label(),
        };

        let profile = CompanyProfile {
            id: reg_no.to_string(),
            label,
            data: CompanyProfileData::from_form(form),
        };

        let mut profiles = self.company_profiles();
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.insert(0, profile.clone()),
        }
        self.write_list(COMPANY_PROFILE_KEY, &profiles)?;

        debug!(id = %profile.id, label = %profile.label, "Saved company profile");
        Ok(profile)
    }

    /// Loads a worker profile by id.
    pub fn load_worker_profile(&self, id: Uuid) -> EngineResult<WorkerProfile> {
        self.worker_profiles()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })
    }

    /// Loads a company profile by registration number.
    pub fn load_company_profile(&self, id: &str) -> EngineResult<CompanyProfile> {
        self.company_profiles()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::ProfileNotFound { id: id.to_string() })
    }

    /// Deletes a worker profile by id. Unknown ids are a no-op.
    pub fn delete_worker_profile(&mut self, id: Uuid) -> EngineResult<()> {
        let mut profiles = self.worker_profiles();
        profiles.retain(|p| p.id != id);
        self.write_list(WORKER_PROFILE_KEY, &profiles)?;
        debug!(id = %id, "Deleted worker profile");
        Ok(())
    }

    /// Deletes a company profile by registration number. Unknown ids are a
    /// no-op.
    pub fn delete_company_profile(&mut self, id: &str) -> EngineResult<()> {
        let mut profiles = self.company_profiles();
        profiles.retain(|p| p.id != id);
        self.write_list(COMPANY_PROFILE_KEY, &profiles)?;
        debug!(id = %id, "Deleted company profile");
        Ok(())
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!(key, error = %err, "Stored profile list is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, list: &[T]) -> EngineResult<()> {
        let encoded = serde_json::to_string(list).map_err(|err| EngineError::StorageEncode {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        self.store.set(key, encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerType;

    fn worker_form(name: &str) -> PayslipForm {
        let mut form = PayslipForm::default();
        form.worker_name = name.to_string();
        form.pay_date = "2026-08-25".to_string();
        form.base_pay = "2,000,000".to_string();
        form
    }

    fn company_form(name: &str, reg_no: &str) -> PayslipForm {
        let mut form = PayslipForm::default();
        form.company_name = name.to_string();
        form.company_reg_no = reg_no.to_string();
        form.company_address = "서울특별시".to_string();
        form
    }

    #[test]
    fn test_empty_store_lists_no_profiles() {
        let profiles = ProfileStore::new(MemoryStore::new());
        assert!(profiles.worker_profiles().is_empty());
        assert!(profiles.company_profiles().is_empty());
    }

    #[test]
    fn test_save_worker_profile_with_default_label() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let saved = profiles
            .save_worker_profile(&worker_form("김철수"), None)
            .unwrap();

        assert_eq!(saved.label, "김철수_2026-08-25");
        assert_eq!(saved.data.base_pay, "2,000,000");
        assert_eq!(profiles.worker_profiles(), vec![saved]);
    }

    #[test]
    fn test_save_worker_profile_with_explicit_label() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let saved = profiles
            .save_worker_profile(&worker_form("김철수"), Some("8월 급여"))
            .unwrap();
        assert_eq!(saved.label, "8월 급여");
    }

    #[test]
    fn test_blank_explicit_label_falls_back_to_derived() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let saved = profiles
            .save_worker_profile(&worker_form("김철수"), Some("  "))
            .unwrap();
        assert_eq!(saved.label, "김철수_2026-08-25");
    }

    #[test]
    fn test_newest_worker_profile_listed_first() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        profiles
            .save_worker_profile(&worker_form("첫째"), None)
            .unwrap();
        profiles
            .save_worker_profile(&worker_form("둘째"), None)
            .unwrap();

        let listed = profiles.worker_profiles();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].data.worker_name, "둘째");
        assert_eq!(listed[1].data.worker_name, "첫째");
    }

    #[test]
    fn test_duplicate_worker_labels_create_separate_entries() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let first = profiles
            .save_worker_profile(&worker_form("김철수"), None)
            .unwrap();
        let second = profiles
            .save_worker_profile(&worker_form("김철수"), None)
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.label, second.label);
        assert_eq!(profiles.worker_profiles().len(), 2);
    }

    #[test]
    fn test_load_worker_profile_and_apply_to_form() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let mut form = worker_form("김철수");
        form.worker_type = WorkerType::Freelancer;
        let saved = profiles.save_worker_profile(&form, None).unwrap();

        let mut target = PayslipForm::default();
        target.company_name = "유지되는 회사".to_string();
        let loaded = profiles.load_worker_profile(saved.id).unwrap();
        loaded.data.apply_to(&mut target);

        assert_eq!(target.worker_name, "김철수");
        assert_eq!(target.worker_type, WorkerType::Freelancer);
        assert_eq!(target.base_pay, "2,000,000");
        // Loading a worker profile leaves company fields alone.
        assert_eq!(target.company_name, "유지되는 회사");
    }

    #[test]
    fn test_load_unknown_worker_profile_fails() {
        let profiles = ProfileStore::new(MemoryStore::new());
        let result = profiles.load_worker_profile(Uuid::nil());
        assert!(matches!(
            result.unwrap_err(),
            EngineError::ProfileNotFound { .. }
        ));
    }

    #[test]
    fn test_delete_worker_profile() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let saved = profiles
            .save_worker_profile(&worker_form("김철수"), None)
            .unwrap();

        profiles.delete_worker_profile(saved.id).unwrap();
        assert!(profiles.worker_profiles().is_empty());
    }

    #[test]
    fn test_delete_unknown_worker_profile_is_noop() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        profiles
            .save_worker_profile(&worker_form("김철수"), None)
            .unwrap();

        profiles.delete_worker_profile(Uuid::nil()).unwrap();
        assert_eq!(profiles.worker_profiles().len(), 1);
    }

    #[test]
    fn test_save_company_profile_requires_name() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let result = profiles.save_company_profile(&company_form("", "220-81-62517"), None);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::MissingCompanyName
        ));
    }

    #[test]
    fn test_save_company_profile_requires_reg_no() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let result = profiles.save_company_profile(&company_form("주식회사 예시", "  "), None);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::MissingCompanyRegNo
        ));
    }

    #[test]
    fn test_save_company_profile_defaults_label_to_name() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        let saved = profiles
            .save_company_profile(&company_form("주식회사 예시", "220-81-62517"), None)
            .unwrap();

        assert_eq!(saved.id, "220-81-62517");
        assert_eq!(saved.label, "주식회사 예시");
    }

    #[test]
    fn test_company_profile_upserts_by_reg_no() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        profiles
            .save_company_profile(&company_form("예전 이름", "220-81-62517"), None)
            .unwrap();
        profiles
            .save_company_profile(&company_form("새 이름", "220-81-62517"), None)
            .unwrap();

        let listed = profiles.company_profiles();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].data.company_name, "새 이름");
    }

    #[test]
    fn test_distinct_reg_nos_keep_separate_entries() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        profiles
            .save_company_profile(&company_form("회사 A", "111-11-11111"), None)
            .unwrap();
        profiles
            .save_company_profile(&company_form("회사 B", "222-22-22222"), None)
            .unwrap();

        assert_eq!(profiles.company_profiles().len(), 2);
    }

    #[test]
    fn test_load_company_profile_by_reg_no() {
        let mut profiles = ProfileStore::new(MemoryStore::new());
        profiles
            .save_company_profile(&company_form("주식회사 예시", "220-81-62517"), None)
            .unwrap();

        let loaded = profiles.load_company_profile("220-81-62517").unwrap();
        assert_eq!(loaded.data.company_address, "서울특별시");

        let missing = profiles.load_company_profile("000-00-00000");
        assert!(matches!(
            missing.unwrap_err(),
            EngineError::ProfileNotFound { .. }
        ));
    }

    #[test]
    fn test_corrupt_worker_list_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(WORKER_PROFILE_KEY, "not json {".to_string());
        let profiles = ProfileStore::new(store);
        assert!(profiles.worker_profiles().is_empty());
    }

    #[test]
    fn test_saving_over_corrupt_list_recovers() {
        let mut store = MemoryStore::new();
        store.set(WORKER_PROFILE_KEY, "[broken".to_string());
        let mut profiles = ProfileStore::new(store);

        profiles
            .save_worker_profile(&worker_form("김철수"), None)
            .unwrap();
        assert_eq!(profiles.worker_profiles().len(), 1);
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set("k", "first".to_string());
        store.set("k", "second".to_string());
        assert_eq!(store.get("k").as_deref(), Some("second"));
    }
}
