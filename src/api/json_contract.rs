use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartDescriptor;

pub const CHART_DESCRIPTOR_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptorJsonContractV1 {
    pub schema_version: u32,
    pub descriptor: ChartDescriptor,
}

impl ChartDescriptor {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDescriptorJsonContractV1 {
            schema_version: CHART_DESCRIPTOR_JSON_SCHEMA_V1,
            descriptor: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize descriptor contract v1: {e}"))
        })
    }

    /// Accepts either a bare descriptor or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(descriptor) = serde_json::from_str::<ChartDescriptor>(input) {
            return Ok(descriptor);
        }
        let payload: ChartDescriptorJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse descriptor json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DESCRIPTOR_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported descriptor schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.descriptor)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ChartDescriptor, empty_descriptor};

    #[test]
    fn contract_rejects_unknown_schema_version() {
        let json = empty_descriptor()
            .to_json_contract_v1_pretty()
            .expect("serialize")
            .replace("\"schema_version\": 1", "\"schema_version\": 9");
        assert!(ChartDescriptor::from_json_compat_str(&json).is_err());
    }

    #[test]
    fn contract_payload_is_accepted() {
        let descriptor = empty_descriptor();
        let json = descriptor.to_json_contract_v1_pretty().expect("serialize");
        let parsed = ChartDescriptor::from_json_compat_str(&json).expect("parse");
        assert_eq!(parsed, descriptor);
    }
}
