/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Wire types of the model registry REST API (`v1alpha3`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Custom properties attached to registry records.
pub type MetadataValueMap = BTreeMap<String, MetadataValue>;

/// Artifact type discriminator for model artifacts.
pub const MODEL_ARTIFACT_TYPE: &str = "model-artifact";

/// A typed custom property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metadataType")]
pub enum MetadataValue {
    #[serde(rename = "MetadataStringValue")]
    String { string_value: String },
    /// Integers travel as decimal strings.
    #[serde(rename = "MetadataIntValue")]
    Int { int_value: String },
    #[serde(rename = "MetadataDoubleValue")]
    Double { double_value: f64 },
    #[serde(rename = "MetadataBoolValue")]
    Bool { bool_value: bool },
    /// Base64 encoded JSON.
    #[serde(rename = "MetadataStructValue")]
    Struct { struct_value: String },
    #[serde(rename = "MetadataProtoValue")]
    Proto {
        #[serde(rename = "type")]
        type_url: String,
        proto_value: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredModel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub custom_properties: MetadataValueMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub registered_model_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub custom_properties: MetadataValueMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifact {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(default)]
    pub custom_properties: MetadataValueMap,
}

/// Paged list envelope shared by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub page_size: i32,
    #[serde(default)]
    pub size: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredModelCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersionCreate {
    pub name: String,
    pub registered_model_id: String,
    pub custom_properties: MetadataValueMap,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersionUpdate {
    pub custom_properties: MetadataValueMap,
}

/// Request body for a new model artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifactCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Empty when the image has not been built yet.
    pub uri: String,
    pub model_format_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model_format_version: String,
    pub artifact_type: &'static str,
}

impl ModelArtifactCreate {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            model_format_name: crate::MODEL_FORMAT_NAME.to_string(),
            artifact_type: MODEL_ARTIFACT_TYPE,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_metadata_value_wire_format() {
        let value = json!({
            "s3SecretName": {"metadataType": "MetadataStringValue", "string_value": "aws-env"},
            "replicas": {"metadataType": "MetadataIntValue", "int_value": "3"},
            "threshold": {"metadataType": "MetadataDoubleValue", "double_value": 0.5},
            "edge": {"metadataType": "MetadataBoolValue", "bool_value": true},
        });
        let map: MetadataValueMap = serde_json::from_value(value).unwrap();

        assert_eq!(
            map["s3SecretName"],
            MetadataValue::String {
                string_value: "aws-env".to_string()
            }
        );
        assert_eq!(
            map["replicas"],
            MetadataValue::Int {
                int_value: "3".to_string()
            }
        );
        assert_eq!(map["threshold"], MetadataValue::Double { double_value: 0.5 });
        assert_eq!(map["edge"], MetadataValue::Bool { bool_value: true });
    }

    #[test]
    fn test_model_version_tolerates_missing_fields() {
        let version: ModelVersion =
            serde_json::from_value(json!({"id": "7", "name": "v1"})).unwrap();
        assert_eq!(version.id, "7");
        assert!(version.custom_properties.is_empty());
        assert!(version.description.is_none());
    }

    #[test]
    fn test_artifact_create_serialization() {
        let body = serde_json::to_value(ModelArtifactCreate::new("bike-rentals", "")).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "bike-rentals",
                "uri": "",
                "modelFormatName": "ContainerImage",
                "artifactType": "model-artifact",
            })
        );
    }

    #[test]
    fn test_list_response_defaults() {
        let list: ListResponse<RegisteredModel> = serde_json::from_value(json!({})).unwrap();
        assert!(list.items.is_empty());
        assert!(list.next_page_token.is_empty());
    }
}
