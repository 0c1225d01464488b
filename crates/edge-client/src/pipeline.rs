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

//! Construction of the `aiedge-e2e` PipelineRun.

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::core::ObjectMeta;
use serde_json::Value;

use crate::crds::pipelineruns::{
    PipelineRun, PipelineRunParams, PipelineRunParamsValue, PipelineRunPipelineRef,
    PipelineRunSpec, PipelineRunTaskRunTemplate, PipelineRunWorkspaces,
    PipelineRunWorkspacesConfigMap, PipelineRunWorkspacesSecret,
    PipelineRunWorkspacesVolumeClaimTemplate, PipelineRunWorkspacesVolumeClaimTemplateSpec,
    PipelineRunWorkspacesVolumeClaimTemplateSpecResources,
};
use crate::error::EdgeError;
use crate::types::BuildParameters;

/// Name of the Tekton pipeline that builds edge model images.
pub const PIPELINE_NAME: &str = "aiedge-e2e";

/// Parameter naming the secret with S3 credentials for fetching the model.
pub const S3_SECRET_PARAM: &str = "s3SecretName";

/// Parameter naming the config map holding test data for the built image.
pub const TEST_DATA_CONFIG_MAP_PARAM: &str = "testDataConfigMapName";

const SERVICE_ACCOUNT_NAME: &str = "pipeline";
const BUILD_WORKSPACE: &str = "build-workspace-pv";
const BUILD_WORKSPACE_SIZE: &str = "1Gi";
const S3_SECRET_WORKSPACE: &str = "s3-secret";
const TEST_DATA_WORKSPACE: &str = "test-data";

pub(crate) const PIPELINE_LABEL: &str = "tekton.dev/pipeline";
pub(crate) const MODEL_NAME_LABEL: &str = "model-name";

/// Workspace sources that must be present among the build parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSources {
    pub s3_secret_name: String,
    pub test_data_config_map_name: String,
}

impl WorkspaceSources {
    pub fn from_parameters(params: &BuildParameters) -> Result<Self, EdgeError> {
        Ok(Self {
            s3_secret_name: required_string(params, S3_SECRET_PARAM)?,
            test_data_config_map_name: required_string(params, TEST_DATA_CONFIG_MAP_PARAM)?,
        })
    }
}

fn required_string(params: &BuildParameters, name: &'static str) -> Result<String, EdgeError> {
    match params.get(name) {
        None => Err(EdgeError::MissingParameter(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(EdgeError::InvalidParameter {
            name,
            expected: "a string",
        }),
    }
}

/// Map build parameters to Tekton params.
///
/// `model-name` and `model-version` come first, followed by every build
/// parameter in key order. Only strings and arrays of strings are accepted.
pub fn to_tekton_params(
    model_name: &str,
    model_version: &str,
    params: &BuildParameters,
) -> Result<Vec<PipelineRunParams>, EdgeError> {
    let mut tekton_params = Vec::with_capacity(params.len() + 2);
    tekton_params.push(string_param("model-name", model_name));
    tekton_params.push(string_param("model-version", model_version));

    for (name, value) in params {
        let value = match value {
            Value::String(s) => PipelineRunParamsValue::String(s.clone()),
            Value::Array(items) => PipelineRunParamsValue::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        other => Err(EdgeError::UnsupportedParameter {
                            name: name.clone(),
                            kind: json_kind(other),
                        }),
                    })
                    .collect::<Result<_, _>>()?,
            ),
            other => {
                return Err(EdgeError::UnsupportedParameter {
                    name: name.clone(),
                    kind: json_kind(other),
                });
            }
        };
        tekton_params.push(PipelineRunParams {
            name: name.clone(),
            value,
        });
    }
    Ok(tekton_params)
}

fn string_param(name: &str, value: &str) -> PipelineRunParams {
    PipelineRunParams {
        name: name.to_string(),
        value: PipelineRunParamsValue::String(value.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build the PipelineRun object submitted for a model image build.
///
/// The name is left to the API server through `generateName`.
pub fn new_pipeline_run_object(
    model_name: &str,
    namespace: &str,
    params: Vec<PipelineRunParams>,
    workspaces: &WorkspaceSources,
) -> PipelineRun {
    let labels = BTreeMap::from([
        (PIPELINE_LABEL.to_string(), PIPELINE_NAME.to_string()),
        (MODEL_NAME_LABEL.to_string(), model_name.to_string()),
    ]);

    PipelineRun {
        metadata: ObjectMeta {
            namespace: Some(namespace.to_string()),
            generate_name: Some(format!("{PIPELINE_NAME}-{model_name}-")),
            labels: Some(labels),
            ..Default::default()
        },
        spec: PipelineRunSpec {
            pipeline_ref: Some(PipelineRunPipelineRef {
                name: PIPELINE_NAME.to_string(),
            }),
            params,
            task_run_template: Some(PipelineRunTaskRunTemplate {
                service_account_name: Some(SERVICE_ACCOUNT_NAME.to_string()),
            }),
            workspaces: vec![
                PipelineRunWorkspaces {
                    name: BUILD_WORKSPACE.to_string(),
                    volume_claim_template: Some(PipelineRunWorkspacesVolumeClaimTemplate {
                        spec: Some(PipelineRunWorkspacesVolumeClaimTemplateSpec {
                            access_modes: vec!["ReadWriteOnce".to_string()],
                            resources: Some(
                                PipelineRunWorkspacesVolumeClaimTemplateSpecResources {
                                    requests: BTreeMap::from([(
                                        "storage".to_string(),
                                        Quantity(BUILD_WORKSPACE_SIZE.to_string()),
                                    )]),
                                },
                            ),
                        }),
                    }),
                    ..Default::default()
                },
                PipelineRunWorkspaces {
                    name: S3_SECRET_WORKSPACE.to_string(),
                    secret: Some(PipelineRunWorkspacesSecret {
                        secret_name: workspaces.s3_secret_name.clone(),
                    }),
                    ..Default::default()
                },
                PipelineRunWorkspaces {
                    name: TEST_DATA_WORKSPACE.to_string(),
                    config_map: Some(PipelineRunWorkspacesConfigMap {
                        name: workspaces.test_data_config_map_name.clone(),
                    }),
                    ..Default::default()
                },
            ],
        },
    }
}
