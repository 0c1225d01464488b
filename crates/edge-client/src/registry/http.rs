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

//! REST implementation of [`ModelRegistry`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{
    ListResponse, MetadataValueMap, ModelArtifact, ModelArtifactCreate, ModelVersion,
    ModelVersionCreate, ModelVersionUpdate, RegisteredModel, RegisteredModelCreate,
};
use super::{ModelRegistry, RegistryError};

const API_PATH: &str = "api/model_registry/v1alpha3/";

/// Page size used when walking list endpoints.
const PAGE_SIZE: u32 = 100;

/// Request timeout used by [`HttpModelRegistry::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Model registry client speaking the registry's REST API.
#[derive(Clone, Debug)]
pub struct HttpModelRegistry {
    client: Client,
    api_url: Url,
}

impl HttpModelRegistry {
    /// Create a client for the registry at `url` (scheme, host and optional
    /// path prefix).
    pub fn new(url: &str) -> Result<Self, RegistryError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, url)
    }

    /// Create a client reusing an existing reqwest client.
    pub fn with_client(client: Client, url: &str) -> Result<Self, RegistryError> {
        let mut base = Url::parse(url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client,
            api_url: base.join(API_PATH)?,
        })
    }

    /// Root of the versioned REST API.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, RegistryError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| RegistryError::InvalidUrl(url::ParseError::RelativeUrlWithoutBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn find_endpoint(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Url, RegistryError> {
        let mut url = self.endpoint(&[resource])?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    async fn send<T, F>(&self, request: RequestBuilder, not_found: F) -> Result<T, RegistryError>
    where
        T: DeserializeOwned,
        F: FnOnce(String) -> RegistryError,
    {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(%status, error = %e, "failed to read model registry error body");
                String::new()
            }
        };
        if status == StatusCode::NOT_FOUND {
            return Err(not_found(body));
        }
        Err(RegistryError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }

    /// Walk every page of a list endpoint.
    async fn list_all<T, F>(&self, segments: &[&str], not_found: F) -> Result<Vec<T>, RegistryError>
    where
        T: DeserializeOwned,
        F: Fn(String) -> RegistryError,
    {
        let mut items = Vec::new();
        let mut page_token = String::new();
        loop {
            let mut url = self.endpoint(segments)?;
            url.query_pairs_mut()
                .append_pair("pageSize", &PAGE_SIZE.to_string());
            if !page_token.is_empty() {
                url.query_pairs_mut()
                    .append_pair("nextPageToken", &page_token);
            }
            tracing::debug!(%url, "listing model registry resources");

            let page: ListResponse<T> = self.send(self.client.get(url), &not_found).await?;
            let done = page.items.is_empty()
                || page.next_page_token.is_empty()
                || page.next_page_token == page_token;
            items.extend(page.items);
            if done {
                return Ok(items);
            }
            page_token = page.next_page_token;
        }
    }
}

fn unexpected_not_found(body: String) -> RegistryError {
    RegistryError::UnexpectedStatus {
        status: StatusCode::NOT_FOUND.as_u16(),
        body,
    }
}

#[async_trait]
impl ModelRegistry for HttpModelRegistry {
    async fn get_registered_models(&self) -> Result<Vec<RegisteredModel>, RegistryError> {
        self.list_all(&["registered_models"], unexpected_not_found)
            .await
    }

    async fn get_registered_model_by_id(
        &self,
        id: &str,
    ) -> Result<RegisteredModel, RegistryError> {
        let url = self.endpoint(&["registered_models", id])?;
        tracing::debug!(%url, "fetching registered model");
        self.send(self.client.get(url), |_| {
            RegistryError::ModelNotFound(id.to_string())
        })
        .await
    }

    async fn find_registered_model(&self, name: &str) -> Result<RegisteredModel, RegistryError> {
        let url = self.find_endpoint("registered_model", &[("name", name)])?;
        tracing::debug!(%url, "finding registered model");
        self.send(self.client.get(url), |_| {
            RegistryError::ModelNotFound(name.to_string())
        })
        .await
    }

    async fn create_registered_model(
        &self,
        name: &str,
        description: &str,
    ) -> Result<RegisteredModel, RegistryError> {
        let url = self.endpoint(&["registered_models"])?;
        let body = RegisteredModelCreate {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        };
        tracing::debug!(%url, name, "creating registered model");
        self.send(self.client.post(url).json(&body), unexpected_not_found)
            .await
    }

    async fn get_model_versions(&self, model_id: &str) -> Result<Vec<ModelVersion>, RegistryError> {
        self.list_all(&["registered_models", model_id, "versions"], |_| {
            RegistryError::ModelNotFound(model_id.to_string())
        })
        .await
    }

    async fn find_model_version(
        &self,
        model_id: &str,
        name: &str,
    ) -> Result<ModelVersion, RegistryError> {
        let url = self.find_endpoint(
            "model_version",
            &[("name", name), ("parentResourceId", model_id)],
        )?;
        tracing::debug!(%url, "finding model version");
        self.send(self.client.get(url), |_| {
            RegistryError::VersionNotFound(name.to_string())
        })
        .await
    }

    async fn create_model_version(
        &self,
        model_id: &str,
        name: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<ModelVersion, RegistryError> {
        let url = self.endpoint(&["model_versions"])?;
        let body = ModelVersionCreate {
            name: name.to_string(),
            registered_model_id: model_id.to_string(),
            custom_properties,
        };
        tracing::debug!(%url, model_id, name, "creating model version");
        self.send(self.client.post(url).json(&body), |_| {
            RegistryError::ModelNotFound(model_id.to_string())
        })
        .await
    }

    async fn update_model_version(
        &self,
        version_id: &str,
        custom_properties: MetadataValueMap,
    ) -> Result<ModelVersion, RegistryError> {
        let url = self.endpoint(&["model_versions", version_id])?;
        let body = ModelVersionUpdate { custom_properties };
        tracing::debug!(%url, "updating model version");
        self.send(self.client.patch(url).json(&body), |_| {
            RegistryError::VersionNotFound(version_id.to_string())
        })
        .await
    }

    async fn get_model_version_artifacts(
        &self,
        version_id: &str,
    ) -> Result<Vec<ModelArtifact>, RegistryError> {
        self.list_all(&["model_versions", version_id, "artifacts"], |_| {
            RegistryError::VersionNotFound(version_id.to_string())
        })
        .await
    }

    async fn find_model_version_artifact(
        &self,
        version_id: &str,
        name: &str,
    ) -> Result<ModelArtifact, RegistryError> {
        let url = self.find_endpoint(
            "model_artifact",
            &[("name", name), ("parentResourceId", version_id)],
        )?;
        tracing::debug!(%url, "finding model artifact");
        self.send(self.client.get(url), |_| {
            RegistryError::ArtifactNotFound(name.to_string())
        })
        .await
    }

    async fn create_model_artifact(
        &self,
        version_id: &str,
        artifact: &ModelArtifactCreate,
    ) -> Result<ModelArtifact, RegistryError> {
        let url = self.endpoint(&["model_versions", version_id, "artifacts"])?;
        tracing::debug!(%url, name = %artifact.name, "creating model artifact");
        self.send(self.client.post(url).json(artifact), |_| {
            RegistryError::VersionNotFound(version_id.to_string())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_keeps_path_prefix() {
        let registry = HttpModelRegistry::new("http://registry.local:8080/proxy").unwrap();
        assert_eq!(
            registry.api_url().as_str(),
            "http://registry.local:8080/proxy/api/model_registry/v1alpha3/"
        );
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let registry = HttpModelRegistry::new("http://registry.local:8080").unwrap();
        let url = registry.endpoint(&["registered_models", "a/b"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://registry.local:8080/api/model_registry/v1alpha3/registered_models/a%2Fb"
        );
    }

    #[test]
    fn test_find_endpoint_query() {
        let registry = HttpModelRegistry::new("http://registry.local:8080").unwrap();
        let url = registry
            .find_endpoint(
                "model_version",
                &[("name", "v 1"), ("parentResourceId", "3")],
            )
            .unwrap();
        assert_eq!(url.path(), "/api/model_registry/v1alpha3/model_version");
        assert_eq!(url.query(), Some("name=v+1&parentResourceId=3"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            HttpModelRegistry::new("not a url"),
            Err(RegistryError::InvalidUrl(_))
        ));
    }
}
