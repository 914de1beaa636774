//! Command handlers called by the presentation layer.
//!
//! Each handler takes raw form input plus the session context and returns
//! `Result<T, String>`; the error string is shown to the user as-is.
//! Every successful store access is logged to the audit buffer; callers
//! redraw afterwards.

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod payments;
pub mod prescriptions;
pub mod session;
pub mod visits;

use chrono::Local;

use crate::core_state::CoreState;
use crate::models::Record;
use crate::store::{HoldsCollection, RecordStore, SelectOption};

/// All records of `T` in insertion order.
pub(crate) fn list_records<T: Record>(state: &CoreState) -> Result<Vec<T>, String>
where
    RecordStore: HoldsCollection<T>,
{
    let store = state.read_store().map_err(|e| e.to_string())?;
    let records = store.collection::<T>().list_all().to_vec();
    drop(store);

    state.log_access("list", T::KIND.as_str());
    Ok(records)
}

/// Case-insensitive search; a blank query lists everything.
pub(crate) fn search_records<T: Record>(query: &str, state: &CoreState) -> Result<Vec<T>, String>
where
    RecordStore: HoldsCollection<T>,
{
    let store = state.read_store().map_err(|e| e.to_string())?;
    let hits: Vec<T> = store
        .collection::<T>()
        .search(query)
        .into_iter()
        .cloned()
        .collect();
    drop(store);

    tracing::debug!(entity = T::KIND.as_str(), query, hits = hits.len(), "Search");
    state.log_access("search", T::KIND.as_str());
    Ok(hits)
}

pub(crate) fn get_record<T: Record>(id: &str, state: &CoreState) -> Result<T, String>
where
    RecordStore: HoldsCollection<T>,
{
    let store = state.read_store().map_err(|e| e.to_string())?;
    let record = store
        .collection::<T>()
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| crate::store::StoreError::not_found::<T>(id).to_string())?;
    drop(store);

    state.log_access("get", T::KIND.as_str());
    Ok(record)
}

pub(crate) fn add_record<T: Record>(record: T, state: &CoreState) -> Result<T, String>
where
    RecordStore: HoldsCollection<T>,
{
    let mut store = state.write_store().map_err(|e| e.to_string())?;
    let added = store.collection_mut::<T>().add(record).clone();
    drop(store);

    tracing::info!(entity = T::KIND.as_str(), id = added.id(), "Record added");
    state.log_access("add", T::KIND.as_str());
    Ok(added)
}

pub(crate) fn update_record<T: Record>(
    id: &str,
    patch: T::Patch,
    state: &CoreState,
) -> Result<T, String>
where
    RecordStore: HoldsCollection<T>,
{
    let mut store = state.write_store().map_err(|e| e.to_string())?;
    let updated = match store.collection_mut::<T>().update(id, patch) {
        Ok(record) => record.clone(),
        Err(e) => {
            tracing::debug!(entity = T::KIND.as_str(), id, "Update target missing");
            return Err(e.to_string());
        }
    };
    drop(store);

    tracing::info!(entity = T::KIND.as_str(), id, "Record updated");
    state.log_access("update", T::KIND.as_str());
    Ok(updated)
}

pub(crate) fn delete_record<T: Record>(id: &str, state: &CoreState) -> Result<T, String>
where
    RecordStore: HoldsCollection<T>,
{
    let mut store = state.write_store().map_err(|e| e.to_string())?;
    let removed = store.collection_mut::<T>().delete(id).map_err(|e| {
        tracing::debug!(entity = T::KIND.as_str(), id, "Delete target missing");
        e.to_string()
    })?;
    drop(store);

    tracing::info!(entity = T::KIND.as_str(), id, "Record deleted");
    state.log_access("delete", T::KIND.as_str());
    Ok(removed)
}

pub(crate) fn record_options<T: Record>(state: &CoreState) -> Result<Vec<SelectOption>, String>
where
    RecordStore: HoldsCollection<T>,
{
    let store = state.read_store().map_err(|e| e.to_string())?;
    Ok(store.collection::<T>().options())
}

/// Trimmed date text, or today's date (YYYY-MM-DD) when blank.
pub(crate) fn date_or_today(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => d.to_string(),
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
pub(crate) fn logged_in_state() -> CoreState {
    let state = CoreState::new();
    state.login("admin", "1234").expect("default admin login");
    state
}
