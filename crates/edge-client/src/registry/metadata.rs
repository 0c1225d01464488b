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

//! Conversion between build parameters and registry custom properties.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use super::RegistryError;
use super::models::{MetadataValue, MetadataValueMap};
use crate::types::BuildParameters;

/// Convert build parameters into registry custom properties.
///
/// Arrays and objects are stored as struct values (base64 encoded JSON).
/// `null` has no registry representation and is rejected.
pub fn to_metadata_value_map(params: &BuildParameters) -> Result<MetadataValueMap, RegistryError> {
    params
        .iter()
        .map(|(key, value)| Ok((key.clone(), to_metadata_value(key, value)?)))
        .collect()
}

/// Convert registry custom properties back into build parameters.
pub fn from_metadata_value_map(
    properties: &MetadataValueMap,
) -> Result<BuildParameters, RegistryError> {
    properties
        .iter()
        .map(|(key, value)| Ok((key.clone(), from_metadata_value(key, value)?)))
        .collect()
}

fn to_metadata_value(key: &str, value: &Value) -> Result<MetadataValue, RegistryError> {
    Ok(match value {
        Value::String(s) => MetadataValue::String {
            string_value: s.clone(),
        },
        Value::Bool(b) => MetadataValue::Bool { bool_value: *b },
        Value::Number(n) => match n.as_i64() {
            Some(i) => MetadataValue::Int {
                int_value: i.to_string(),
            },
            None => MetadataValue::Double {
                double_value: n
                    .as_f64()
                    .ok_or_else(|| RegistryError::metadata(key, "number out of range"))?,
            },
        },
        Value::Array(_) | Value::Object(_) => {
            let json = serde_json::to_vec(value)
                .map_err(|e| RegistryError::metadata(key, e.to_string()))?;
            MetadataValue::Struct {
                struct_value: STANDARD.encode(json),
            }
        }
        Value::Null => return Err(RegistryError::metadata(key, "null values are not supported")),
    })
}

fn from_metadata_value(key: &str, value: &MetadataValue) -> Result<Value, RegistryError> {
    Ok(match value {
        MetadataValue::String { string_value } => Value::String(string_value.clone()),
        MetadataValue::Bool { bool_value } => Value::Bool(*bool_value),
        MetadataValue::Int { int_value } => {
            let i: i64 = int_value
                .parse()
                .map_err(|_| RegistryError::metadata(key, format!("bad int value {int_value}")))?;
            Value::from(i)
        }
        MetadataValue::Double { double_value } => serde_json::Number::from_f64(*double_value)
            .map(Value::Number)
            .ok_or_else(|| RegistryError::metadata(key, "double value is not finite"))?,
        MetadataValue::Struct { struct_value } => {
            let bytes = STANDARD
                .decode(struct_value)
                .map_err(|e| RegistryError::metadata(key, e.to_string()))?;
            serde_json::from_slice(&bytes)
                .map_err(|e| RegistryError::metadata(key, e.to_string()))?
        }
        MetadataValue::Proto { type_url, .. } => {
            return Err(RegistryError::metadata(
                key,
                format!("proto values ({type_url}) are not supported"),
            ));
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> BuildParameters {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_scalar_values() {
        let md = to_metadata_value_map(&params(json!({
            "s3SecretName": "aws-env",
            "fetchModel": true,
            "retries": 2,
            "ratio": 0.25,
        })))
        .unwrap();

        assert_eq!(
            md["s3SecretName"],
            MetadataValue::String {
                string_value: "aws-env".to_string()
            }
        );
        assert_eq!(md["fetchModel"], MetadataValue::Bool { bool_value: true });
        assert_eq!(
            md["retries"],
            MetadataValue::Int {
                int_value: "2".to_string()
            }
        );
        assert_eq!(md["ratio"], MetadataValue::Double { double_value: 0.25 });
    }

    #[test]
    fn test_array_is_stored_as_struct() {
        let input = params(json!({"modelRelativePath": ["a", "b"]}));
        let md = to_metadata_value_map(&input).unwrap();

        let MetadataValue::Struct { struct_value } = &md["modelRelativePath"] else {
            panic!("expected struct value, got {:?}", md["modelRelativePath"]);
        };
        assert_eq!(STANDARD.decode(struct_value).unwrap(), br#"["a","b"]"#);

        assert_eq!(from_metadata_value_map(&md).unwrap(), input);
    }

    #[test]
    fn test_null_is_rejected() {
        let err = to_metadata_value_map(&params(json!({"gitRef": null}))).unwrap_err();
        assert!(matches!(err, RegistryError::Metadata { ref key, .. } if key == "gitRef"));
    }

    #[test]
    fn test_bad_int_value() {
        let mut md = MetadataValueMap::new();
        md.insert(
            "replicas".to_string(),
            MetadataValue::Int {
                int_value: "three".to_string(),
            },
        );
        assert!(from_metadata_value_map(&md).is_err());
    }

    #[test]
    fn test_proto_value_is_rejected() {
        let mut md = MetadataValueMap::new();
        md.insert(
            "blob".to_string(),
            MetadataValue::Proto {
                type_url: "type.googleapis.com/foo".to_string(),
                proto_value: String::new(),
            },
        );
        let err = from_metadata_value_map(&md).unwrap_err();
        assert!(err.to_string().contains("proto values"));
    }
}
