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

//! Shared test infrastructure for edge client tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use kube::Resource;

use crate::crds::pipelineruns::PipelineRun;
use crate::error::EdgeError;
use crate::registry::{
    MetadataValueMap, ModelArtifact, ModelArtifactCreate, ModelRegistry, ModelVersion,
    RegisteredModel, RegistryError, to_metadata_value_map,
};
use crate::repository::PipelineRunRepository;
use crate::types::BuildParameters;

pub(crate) const KUBECONFIG: &str = "/tmp/edge-test-kubeconfig";

type Failure = fn(&str) -> RegistryError;

#[derive(Default)]
struct RegistryState {
    next_id: u64,
    models: BTreeMap<String, RegisteredModel>,
    versions: BTreeMap<String, ModelVersion>,
    /// Artifacts with the ID of their model version.
    artifacts: BTreeMap<String, (String, ModelArtifact)>,
}

impl RegistryState {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

/// In-memory model registry recording every call it receives.
#[derive(Clone, Default)]
pub(crate) struct MockRegistry {
    state: Arc<RwLock<RegistryState>>,
    calls: Arc<Mutex<Vec<String>>>,
    failures: Arc<RwLock<BTreeMap<&'static str, Failure>>>,
}

impl MockRegistry {
    pub fn add_model(&self, name: &str, description: &str) -> String {
        let mut state = self.state.write().unwrap();
        let id = state.next_id();
        state.models.insert(
            id.clone(),
            RegisteredModel {
                id: id.clone(),
                name: name.to_string(),
                description: Some(description.to_string()),
                ..Default::default()
            },
        );
        id
    }

    pub fn add_version(&self, model_id: &str, name: &str, params: &BuildParameters) -> String {
        let custom_properties = to_metadata_value_map(params).unwrap();
        let mut state = self.state.write().unwrap();
        let id = state.next_id();
        state.versions.insert(
            id.clone(),
            ModelVersion {
                id: id.clone(),
                name: name.to_string(),
                registered_model_id: model_id.to_string(),
                custom_properties,
                ..Default::default()
            },
        );
        id
    }

    pub fn add_artifact(&self, version_id: &str, name: &str, uri: &str) -> String {
        let mut state = self.state.write().unwrap();
        let id = state.next_id();
        state.artifacts.insert(
            id.clone(),
            (
                version_id.to_string(),
                ModelArtifact {
                    id: id.clone(),
                    name: name.to_string(),
                    uri: Some(uri.to_string()),
                    ..Default::default()
                },
            ),
        );
        id
    }

    /// Make `method` fail with the error built from its first argument.
    pub fn fail_on(&self, method: &'static str, failure: Failure) {
        self.failures.write().unwrap().insert(method, failure);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn models(&self) -> Vec<RegisteredModel> {
        self.state.read().unwrap().models.values().cloned().collect()
    }

    pub fn versions(&self) -> Vec<ModelVersion> {
        self.state.read().unwrap().versions.values().cloned().collect()
    }

    pub fn version(&self, id: &str) -> Option<ModelVersion> {
        self.state.read().unwrap().versions.get(id).cloned()
    }

    /// Artifacts with the ID of their model version.
    pub fn artifacts(&self) -> Vec<(String, ModelArtifact)> {
        self.state
            .read()
            .unwrap()
            .artifacts
            .values()
            .cloned()
            .collect()
    }

    fn record(&self, method: &'static str, arg: &str) -> Result<(), RegistryError> {
        self.calls.lock().unwrap().push(method.to_string());
        match self.failures.read().unwrap().get(method) {
            Some(failure) => Err(failure(arg)),
            None => Ok(()),
        }
    }
}

pub(crate) fn server_error(_: &str) -> RegistryError {
    RegistryError::UnexpectedStatus {
        status: 500,
        body: "internal error".to_string(),
    }
}

#[async_trait]
impl ModelRegistry for MockRegistry {
    async fn get_registered_models(&self) -> Result<Vec<RegisteredModel>, RegistryError> {
        self.record("get_registered_models", "")?;
        Ok(self.models())
    }

    async fn get_registered_model_by_id(
        &self,
        id: &str,
    ) -> Result<RegisteredModel, RegistryError> {
        self.record("get_registered_model_by_id", id)?;
        self.state
            .read()
            .unwrap()
            .models
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::ModelNotFound(id.to_string()))
    }

    async fn find_registered_model(&self, name: &str) -> Result<RegisteredModel, RegistryError> {
        self.record("find_registered_model", name)?;
        self.state
            .read()
            .unwrap()
            .models
            .values()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| RegistryError::ModelNotFound(name.to_string()))
    }

    async fn create_registered_model(
        &self,
        name: &str,
        description: &str,
    ) -> Result<RegisteredModel, RegistryError> {
        self.record("create_registered_model", name)?;
        let id = self.add_model(name, description);
        Ok(self.state.read().unwrap().models[&id].clone())
    }

    async fn get_model_versions(&self, model_id: &str) -> Result<Vec<ModelVersion>, RegistryError> {
        self.record("get_model_versions", model_id)?;
        let state = self.state.read().unwrap();
        if !state.models.contains_key(model_id) {
            return Err(RegistryError::ModelNotFound(model_id.to_string()));
        }
        Ok(state
            .versions
            .values()
            .filter(|v| v.registered_model_id == model_id)
            .cloned()
            .collect())
    }

    async fn find_model_version(
        &self,
        model_id: &str,
        name: &str,
    ) -> Result<ModelVersion, RegistryError> {
        self.record("find_model_version", name)?;
        self.state
            .read()
            .unwrap()
            .versions
            .values()
            .find(|v| v.registered_model_id == model_id && v.name == name)
            .cloned()
            .ok_or_else(|| RegistryError::VersionNotFound(name.to_string()))
    }

    async fn create_model_version(
        &self,
        model_id: &str,
        name: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<ModelVersion, RegistryError> {
        self.record("create_model_version", name)?;
        let mut state = self.state.write().unwrap();
        if !state.models.contains_key(model_id) {
            return Err(RegistryError::ModelNotFound(model_id.to_string()));
        }
        let id = state.next_id();
        let version = ModelVersion {
            id: id.clone(),
            name: name.to_string(),
            registered_model_id: model_id.to_string(),
            custom_properties,
            ..Default::default()
        };
        state.versions.insert(id, version.clone());
        Ok(version)
    }

    async fn update_model_version(
        &self,
        version_id: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<ModelVersion, RegistryError> {
        self.record("update_model_version", version_id)?;
        let mut state = self.state.write().unwrap();
        let version = state
            .versions
            .get_mut(version_id)
            .ok_or_else(|| RegistryError::VersionNotFound(version_id.to_string()))?;
        version.custom_properties = custom_properties;
        Ok(version.clone())
    }

    async fn get_model_version_artifacts(
        &self,
        version_id: &str,
    ) -> Result<Vec<ModelArtifact>, RegistryError> {
        self.record("get_model_version_artifacts", version_id)?;
        let state = self.state.read().unwrap();
        if !state.versions.contains_key(version_id) {
            return Err(RegistryError::VersionNotFound(version_id.to_string()));
        }
        Ok(state
            .artifacts
            .values()
            .filter(|(v, _)| v == version_id)
            .map(|(_, a)| a.clone())
            .collect())
    }

    async fn find_model_version_artifact(
        &self,
        version_id: &str,
        name: &str,
    ) -> Result<ModelArtifact, RegistryError> {
        self.record("find_model_version_artifact", name)?;
        self.state
            .read()
            .unwrap()
            .artifacts
            .values()
            .find(|(v, a)| v == version_id && a.name == name)
            .map(|(_, a)| a.clone())
            .ok_or_else(|| RegistryError::ArtifactNotFound(name.to_string()))
    }

    async fn create_model_artifact(
        &self,
        version_id: &str,
        artifact: &ModelArtifactCreate,
    ) -> Result<ModelArtifact, RegistryError> {
        self.record("create_model_artifact", version_id)?;
        let mut state = self.state.write().unwrap();
        if !state.versions.contains_key(version_id) {
            return Err(RegistryError::VersionNotFound(version_id.to_string()));
        }
        let id = state.next_id();
        let created = ModelArtifact {
            id: id.clone(),
            name: artifact.name.clone(),
            description: artifact.description.clone(),
            uri: Some(artifact.uri.clone()),
            model_format_name: Some(artifact.model_format_name.clone()),
            artifact_type: Some(artifact.artifact_type.to_string()),
            ..Default::default()
        };
        state
            .artifacts
            .insert(id, (version_id.to_string(), created.clone()));
        Ok(created)
    }
}

/// PipelineRun repository that records created runs instead of talking to a
/// cluster. Names are generated the way the API server does for
/// `generateName`.
#[derive(Clone, Default)]
pub(crate) struct RecordingPipelines {
    created: Arc<Mutex<Vec<(String, PipelineRun)>>>,
    fail: Arc<Mutex<bool>>,
}

impl RecordingPipelines {
    pub fn fail_creates(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Created runs with the kubeconfig they were created with.
    pub fn created(&self) -> Vec<(String, PipelineRun)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl PipelineRunRepository for RecordingPipelines {
    async fn create(
        &self,
        kube_config: &str,
        run: &PipelineRun,
    ) -> Result<PipelineRun, EdgeError> {
        if *self.fail.lock().unwrap() {
            return Err(EdgeError::invalid_input("admission webhook denied the request"));
        }
        let mut created = run.clone();
        let prefix = run.meta().generate_name.clone().unwrap_or_default();
        created.metadata.name = Some(format!("{prefix}x7k2p"));
        self.created
            .lock()
            .unwrap()
            .push((kube_config.to_string(), created.clone()));
        Ok(created)
    }
}

/// Build parameters accepted by the `aiedge-e2e` pipeline.
pub(crate) fn build_params() -> BuildParameters {
    serde_json::from_value(serde_json::json!({
        "s3SecretName": "aws-env",
        "testDataConfigMapName": "bike-rentals-test-data",
        "gitModelRepo": "https://github.com/example/ai-edge-models.git",
        "modelRelativePath": "pipelines/models",
    }))
    .unwrap()
}
