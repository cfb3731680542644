//! Remote row-storage API integration

pub mod client;
pub mod row;

pub use client::{HttpRowStoreClient, RowStoreClient, RowStoreError};
pub use row::{RemoteRowPayload, FIELD_RENAMES};
