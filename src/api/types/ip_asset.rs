use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{
    api::types::common::present,
    error::{AppError, Result},
    infrastructure::store::entities::NewIpAsset,
    services::upload::StoredFile,
};

/// Text fields of the multipart upload, keyed by form field name.
#[derive(Debug, Default)]
pub struct IpAssetForm {
    pub fields: HashMap<String, String>,
}

impl IpAssetForm {
    const TEXT_FIELDS: [&'static str; 9] = [
        "title",
        "description",
        "assetType",
        "culturalOrigin",
        "language",
        "region",
        "creationDate",
        "royaltyRate",
        "userId",
    ];

    pub fn insert(&mut self, name: String, value: String) {
        if Self::TEXT_FIELDS.contains(&name.as_str()) {
            self.fields.insert(name, value);
        }
    }

    pub fn user_id(&self) -> Result<i32> {
        let raw = present(self.fields.get("userId").cloned())
            .ok_or_else(|| AppError::InvalidParams("User ID is required".into()))?;

        raw.trim()
            .parse()
            .map_err(|_| AppError::InvalidParams("User ID must be an integer".into()))
    }

    /// Builds the insert payload, with file name and size taken from the
    /// stored upload rather than the client.
    pub fn into_new_ip_asset(&self, file: &StoredFile) -> Result<NewIpAsset> {
        let mut payload: Map<String, Value> = self
            .fields
            .iter()
            .filter(|(name, _)| name.as_str() != "userId")
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        payload.insert("fileName".into(), Value::String(file.file_name.clone()));
        payload.insert("fileSize".into(), Value::from(file.file_size));

        serde_json::from_value(Value::Object(payload)).map_err(|e| AppError::Validation {
            message: "Invalid IP asset data".into(),
            errors: serde_json::json!([e.to_string()]),
        })
    }
}
