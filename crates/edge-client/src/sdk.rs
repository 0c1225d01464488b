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

//! Edge client - high-level interface over the model registry and Tekton.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{EdgeError, RegistryResultExt};
use crate::pipeline::{WorkspaceSources, new_pipeline_run_object, to_tekton_params};
use crate::registry::{
    DEFAULT_TIMEOUT, HttpModelRegistry, MetadataValueMap, ModelArtifact, ModelArtifactCreate,
    ModelRegistry, ModelVersion, RegisteredModel, RegistryError, from_metadata_value_map,
    to_metadata_value_map,
};
use crate::repository::{KubeRepository, PipelineRunRepository};
use crate::types::{BuildParameters, Model, ModelImage, PipelineRun};
use crate::EDGE_COMPATIBLE_KEY;

const ENSURE_RESOURCES: &str = "failed to ensure resources are in model registry";
const ENSURE_VERSION: &str = "failed to ensure version is in model registry";
const ENSURE_ARTIFACT: &str = "failed to ensure artifact is in model registry";

/// Client for the edge environment.
///
/// Creates and manages models and model container images suitable for
/// deployment in edge environments.
///
/// Trait bounds are on the impl blocks: registry operations need only `R`,
/// PipelineRun creation only `P`.
pub struct EdgeClient<R, P = KubeRepository> {
    registry: Arc<R>,
    pipelines: P,
}

impl EdgeClient<HttpModelRegistry> {
    /// Create a client for the model registry at `model_registry_url`.
    ///
    /// `http://` is assumed when the URL has no scheme.
    pub fn new(model_registry_url: &str) -> Result<Self, EdgeError> {
        Self::with_timeout(model_registry_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(model_registry_url: &str, timeout: Duration) -> Result<Self, EdgeError> {
        let url = normalize_registry_url(model_registry_url);
        let registry = HttpModelRegistry::with_timeout(&url, timeout)
            .context("failed to create model registry client")?;
        Ok(Self::with_parts(registry, KubeRepository::new()))
    }
}

impl<R, P> EdgeClient<R, P> {
    /// Create a client from explicit backends.
    pub fn with_parts(registry: R, pipelines: P) -> Self {
        Self {
            registry: Arc::new(registry),
            pipelines,
        }
    }

    /// Replace the PipelineRun backend.
    pub fn with_pipelines<P2>(self, pipelines: P2) -> EdgeClient<R, P2> {
        EdgeClient {
            registry: self.registry,
            pipelines,
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn pipelines(&self) -> &P {
        &self.pipelines
    }
}

/// Prefix `http://` to URLs given without a scheme.
pub fn normalize_registry_url(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Mark the parameters as edge compatible and convert them to custom properties.
fn edge_compatible_metadata(params: &mut BuildParameters) -> Result<MetadataValueMap, RegistryError> {
    params.insert(EDGE_COMPATIBLE_KEY.to_string(), "true".into());
    to_metadata_value_map(params)
}

fn model_image(
    model: &RegisteredModel,
    version: &ModelVersion,
    build_params: BuildParameters,
    artifact: Option<&ModelArtifact>,
) -> ModelImage {
    ModelImage {
        model_id: model.id.clone(),
        name: model.name.clone(),
        description: model.description.clone().unwrap_or_default(),
        version: version.name.clone(),
        build_params,
        uri: artifact.and_then(|a| a.uri.clone()).unwrap_or_default(),
    }
}

impl<R: ModelRegistry, P> EdgeClient<R, P> {
    /// List the models in the model registry.
    pub async fn get_models(&self) -> Result<Vec<Model>, EdgeError> {
        let models = self
            .registry
            .get_registered_models()
            .await
            .context("failed to get models")?;
        Ok(models
            .into_iter()
            .map(|m| Model {
                id: m.id,
                name: m.name,
                description: m.description.unwrap_or_default(),
            })
            .collect())
    }

    /// Add a model to the model registry along with the model version and the
    /// build parameters used by the image build.
    ///
    /// The registered model is reused when one with the same name exists; the
    /// version must be new. The artifact is named after the model and records
    /// `uri`, which may be empty until the image is built.
    pub async fn add_new_model_with_image(
        &self,
        model_name: &str,
        model_description: &str,
        model_version: &str,
        uri: &str,
        mut parameters: BuildParameters,
    ) -> Result<ModelImage, EdgeError> {
        if model_name.is_empty() || model_description.is_empty() || model_version.is_empty() {
            return Err(EdgeError::invalid_input(
                "model name, description, and version are required",
            ));
        }

        let md = edge_compatible_metadata(&mut parameters).context("failed to add model image")?;
        let (model, version, artifact) = self
            .register_model_version_artifact(model_name, model_description, model_version, uri, md)
            .await
            .context("failed to add model image")?;

        let build_params =
            from_metadata_value_map(&version.custom_properties).context("failed to add model image")?;
        Ok(model_image(&model, &version, build_params, Some(&artifact)))
    }

    async fn register_model_version_artifact(
        &self,
        model_name: &str,
        model_description: &str,
        model_version: &str,
        uri: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<(RegisteredModel, ModelVersion, ModelArtifact), RegistryError> {
        let model = match self.registry.find_registered_model(model_name).await {
            Ok(model) => model,
            Err(RegistryError::ModelNotFound(_)) => {
                let model = self
                    .registry
                    .create_registered_model(model_name, model_description)
                    .await?;
                tracing::info!(model_id = %model.id, model_name, "Registered model");
                model
            }
            Err(e) => return Err(e),
        };

        match self.registry.find_model_version(&model.id, model_version).await {
            Ok(_) => {
                return Err(RegistryError::VersionAlreadyExists {
                    model_id: model.id,
                    version: model_version.to_string(),
                });
            }
            Err(RegistryError::VersionNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let version = self
            .registry
            .create_model_version(&model.id, model_version, custom_properties)
            .await?;
        tracing::info!(
            model_id = %model.id,
            version_id = %version.id,
            version = model_version,
            "Created model version"
        );

        let mut new_artifact = ModelArtifactCreate::new(model_name, uri);
        new_artifact.description = Some(model_description.to_string());
        let artifact = self
            .registry
            .create_model_artifact(&version.id, &new_artifact)
            .await?;
        tracing::info!(artifact_id = %artifact.id, version_id = %version.id, "Created model artifact");

        Ok((model, version, artifact))
    }

    /// List the model images in the model registry.
    ///
    /// Every artifact of every model version is one image. A version without
    /// artifacts is reported once with an empty URI.
    pub async fn get_model_images(&self) -> Result<Vec<ModelImage>, EdgeError> {
        const CONTEXT: &str = "failed to get model images";

        let models = self
            .registry
            .get_registered_models()
            .await
            .context(CONTEXT)?;

        let mut images = Vec::new();
        for model in &models {
            let versions = match self.registry.get_model_versions(&model.id).await {
                Ok(versions) => versions,
                Err(e @ RegistryError::ModelNotFound(_)) => {
                    return Err(EdgeError::registry(
                        format!("{CONTEXT}: can't find model with id {}", model.id),
                        e,
                    ));
                }
                Err(e) => return Err(EdgeError::registry(CONTEXT, e)),
            };

            for version in &versions {
                let artifacts = match self.registry.get_model_version_artifacts(&version.id).await {
                    Ok(artifacts) => artifacts,
                    Err(e @ RegistryError::VersionNotFound(_)) => {
                        return Err(EdgeError::registry(
                            format!("{CONTEXT}: can't find model version with id {}", version.id),
                            e,
                        ));
                    }
                    Err(e) => return Err(EdgeError::registry(CONTEXT, e)),
                };
                let params = from_metadata_value_map(&version.custom_properties).context(CONTEXT)?;

                if artifacts.is_empty() {
                    images.push(model_image(model, version, params, None));
                } else {
                    // TODO: report whether the image is built once the pipeline writes the image digest back
                    images.extend(
                        artifacts
                            .iter()
                            .map(|a| model_image(model, version, params.clone(), Some(a))),
                    );
                }
            }
        }
        Ok(images)
    }

    /// Synchronize edge model image information with the model registry.
    ///
    /// Ensures the model version and its model artifact exist and the version
    /// is marked edge compatible:
    ///
    /// - a missing version is created from `parameters`, or fails when
    ///   `parameters` is `None`;
    /// - an existing version has its custom properties replaced by
    ///   `parameters` when given;
    /// - a missing artifact is created with an empty URI.
    ///
    /// Returns the build parameters now stored on the version.
    pub async fn update_model_image(
        &self,
        registered_model_id: &str,
        model_version_name: &str,
        parameters: Option<BuildParameters>,
    ) -> Result<BuildParameters, EdgeError> {
        if registered_model_id.is_empty() || model_version_name.is_empty() {
            return Err(EdgeError::invalid_input(
                "registered model ID and model version name required",
            ));
        }

        self.ensure_resources_are_in_model_registry(
            registered_model_id,
            model_version_name,
            parameters,
        )
        .await
    }

    async fn ensure_resources_are_in_model_registry(
        &self,
        registered_model_id: &str,
        model_version_name: &str,
        parameters: Option<BuildParameters>,
    ) -> Result<BuildParameters, EdgeError> {
        let model = match self
            .registry
            .get_registered_model_by_id(registered_model_id)
            .await
        {
            Ok(model) => model,
            Err(e @ RegistryError::ModelNotFound(_)) => {
                return Err(EdgeError::registry("model not found", e));
            }
            Err(e) => return Err(EdgeError::registry(ENSURE_RESOURCES, e)),
        };

        let (version, parameters) = self
            .ensure_version_is_in_model_registry(registered_model_id, model_version_name, parameters)
            .await
            .map_err(|e| e.context(ENSURE_RESOURCES))?;

        self.ensure_artifact_is_in_model_registry(
            &version.id,
            &model.name,
            model.description.as_deref(),
        )
        .await
        .map_err(|e| e.context(ENSURE_RESOURCES))?;

        Ok(parameters)
    }

    async fn ensure_version_is_in_model_registry(
        &self,
        registered_model_id: &str,
        model_version_name: &str,
        parameters: Option<BuildParameters>,
    ) -> Result<(ModelVersion, BuildParameters), EdgeError> {
        let found = self
            .registry
            .find_model_version(registered_model_id, model_version_name)
            .await;

        let version = match (found, parameters) {
            (Err(e @ RegistryError::VersionNotFound(_)), None) => {
                return Err(EdgeError::registry(
                    "model version not found and no parameters provided",
                    e,
                ));
            }
            (Err(RegistryError::VersionNotFound(_)), Some(mut parameters)) => {
                let md = edge_compatible_metadata(&mut parameters).context(ENSURE_VERSION)?;
                let version = self
                    .registry
                    .create_model_version(registered_model_id, model_version_name, md)
                    .await
                    .context(ENSURE_VERSION)?;
                tracing::info!(
                    model_id = registered_model_id,
                    version_id = %version.id,
                    "Created model version"
                );
                version
            }
            (Err(e), _) => return Err(EdgeError::registry(ENSURE_VERSION, e)),
            (Ok(version), Some(mut parameters)) => {
                let md = edge_compatible_metadata(&mut parameters).context(ENSURE_VERSION)?;
                let version = self
                    .registry
                    .update_model_version(&version.id, md)
                    .await
                    .context(ENSURE_VERSION)?;
                tracing::info!(version_id = %version.id, "Updated model version build parameters");
                version
            }
            (Ok(version), None) => version,
        };

        let parameters =
            from_metadata_value_map(&version.custom_properties).context(ENSURE_VERSION)?;
        Ok((version, parameters))
    }

    async fn ensure_artifact_is_in_model_registry(
        &self,
        model_version_id: &str,
        artifact_name: &str,
        description: Option<&str>,
    ) -> Result<(), EdgeError> {
        match self
            .registry
            .find_model_version_artifact(model_version_id, artifact_name)
            .await
        {
            Ok(_) => Ok(()),
            Err(RegistryError::ArtifactNotFound(_)) => {
                let mut artifact = ModelArtifactCreate::new(artifact_name, "");
                artifact.description = description.map(str::to_string);
                let created = self
                    .registry
                    .create_model_artifact(model_version_id, &artifact)
                    .await
                    .context(ENSURE_ARTIFACT)?;
                tracing::info!(
                    artifact_id = %created.id,
                    version_id = model_version_id,
                    "Created model artifact"
                );
                Ok(())
            }
            Err(e) => Err(EdgeError::registry(ENSURE_ARTIFACT, e)),
        }
    }
}

impl<R: ModelRegistry, P: PipelineRunRepository> EdgeClient<R, P> {
    /// Build a model container image for a model version by creating a
    /// Tekton PipelineRun in `namespace` on the cluster of `kube_config`.
    ///
    /// For the run to succeed, the model, version and artifact must exist in
    /// the registry, the version must be edge compatible and its custom
    /// properties must carry the pipeline's build parameters.
    ///
    /// When `parameters` is `None` the version's custom properties are used;
    /// otherwise `parameters` are passed to the PipelineRun as given.
    pub async fn build_model_image(
        &self,
        model_id: &str,
        model_version: &str,
        namespace: &str,
        kube_config: &str,
        parameters: Option<BuildParameters>,
    ) -> Result<PipelineRun, EdgeError> {
        const CONTEXT: &str = "failed to build model image";

        if model_id.is_empty()
            || model_version.is_empty()
            || namespace.is_empty()
            || kube_config.is_empty()
        {
            return Err(EdgeError::invalid_input(
                "model ID, model version, namespace, and kubeconfig are required",
            ));
        }

        let model = self
            .registry
            .get_registered_model_by_id(model_id)
            .await
            .context(CONTEXT)?;
        let version = self
            .registry
            .find_model_version(model_id, model_version)
            .await
            .context(CONTEXT)?;

        let parameters = match parameters {
            Some(parameters) => parameters,
            None => from_metadata_value_map(&version.custom_properties).context(CONTEXT)?,
        };

        self.create_pipeline_run(
            &model.name,
            model_version,
            namespace,
            kube_config,
            &parameters,
        )
        .await
    }
}

impl<R, P: PipelineRunRepository> EdgeClient<R, P> {
    /// Create a Tekton PipelineRun building a model container image.
    ///
    /// `parameters` must contain the `s3SecretName` and
    /// `testDataConfigMapName` strings naming the workspaces of the run.
    pub async fn create_pipeline_run(
        &self,
        model_name: &str,
        model_version: &str,
        namespace: &str,
        kube_config: &str,
        parameters: &BuildParameters,
    ) -> Result<PipelineRun, EdgeError> {
        let workspaces = WorkspaceSources::from_parameters(parameters)?;
        let params = to_tekton_params(model_name, model_version, parameters)
            .map_err(|e| e.context("failed to convert parameters to tekton params"))?;

        let run = new_pipeline_run_object(model_name, namespace, params, &workspaces);
        let created = self
            .pipelines
            .create(kube_config, &run)
            .await
            .map_err(|e| e.context("failed to create pipeline run"))?;

        Ok(PipelineRun {
            name: created.metadata.name.unwrap_or_default(),
            namespace: created.metadata.namespace.unwrap_or_default(),
        })
    }
}
