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

//! Model registry trait.

use async_trait::async_trait;

use super::RegistryError;
use super::models::{
    MetadataValueMap, ModelArtifact, ModelArtifactCreate, ModelVersion, RegisteredModel,
};

/// Operations the edge client needs from a model registry.
///
/// Lookups by ID or name report a missing record with the matching
/// `*NotFound` variant of [`RegistryError`] so callers can decide between
/// creating and updating.
#[async_trait]
pub trait ModelRegistry: Send + Sync {
    async fn get_registered_models(&self) -> Result<Vec<RegisteredModel>, RegistryError>;

    async fn get_registered_model_by_id(&self, id: &str)
    -> Result<RegisteredModel, RegistryError>;

    async fn find_registered_model(&self, name: &str) -> Result<RegisteredModel, RegistryError>;

    async fn create_registered_model(
        &self,
        name: &str,
        description: &str,
    ) -> Result<RegisteredModel, RegistryError>;

    /// Versions of a registered model. Fails with `ModelNotFound` for an
    /// unknown model.
    async fn get_model_versions(&self, model_id: &str) -> Result<Vec<ModelVersion>, RegistryError>;

    async fn find_model_version(
        &self,
        model_id: &str,
        name: &str,
    ) -> Result<ModelVersion, RegistryError>;

    async fn create_model_version(
        &self,
        model_id: &str,
        name: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<ModelVersion, RegistryError>;

    /// Replace the custom properties of a model version.
    async fn update_model_version(
        &self,
        version_id: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<ModelVersion, RegistryError>;

    /// Artifacts of a model version. Fails with `VersionNotFound` for an
    /// unknown version.
    async fn get_model_version_artifacts(
        &self,
        version_id: &str,
    ) -> Result<Vec<ModelArtifact>, RegistryError>;

    async fn find_model_version_artifact(
        &self,
        version_id: &str,
        name: &str,
    ) -> Result<ModelArtifact, RegistryError>;

    async fn create_model_artifact(
        &self,
        version_id: &str,
        artifact: &ModelArtifactCreate,
    ) -> Result<ModelArtifact, RegistryError>;
}
