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

//! Kubernetes implementation of the repository traits.

use async_trait::async_trait;
use kube::api::PostParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config, Resource};

use super::traits::*;
use crate::crds::pipelineruns::PipelineRun;
use crate::error::EdgeError;

/// Kubernetes-backed repository.
///
/// A client is built from the given kubeconfig on every call, since each
/// operation may target a different cluster.
#[derive(Clone, Debug, Default)]
pub struct KubeRepository {
    context: Option<String>,
}

impl KubeRepository {
    /// Use the current context of each kubeconfig.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a named context instead of the kubeconfig's current context.
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
        }
    }

    /// Kubeconfig context used for new clients; `None` means the current one.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    async fn client(&self, kube_config: &str) -> Result<Client, EdgeError> {
        let kubeconfig = Kubeconfig::read_from(kube_config)?;
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        };
        let config = Config::from_custom_kubeconfig(kubeconfig, &options).await?;
        Ok(Client::try_from(config)?)
    }
}

#[async_trait]
impl PipelineRunRepository for KubeRepository {
    async fn create(
        &self,
        kube_config: &str,
        run: &PipelineRun,
    ) -> Result<PipelineRun, EdgeError> {
        let client = self.client(kube_config).await?;
        let namespace = run.meta().namespace.as_deref().unwrap_or("default");
        let api: Api<PipelineRun> = Api::namespaced(client, namespace);
        let created = api.create(&PostParams::default(), run).await?;
        tracing::info!(
            name = created.meta().name.as_deref().unwrap_or_default(),
            namespace,
            "Created PipelineRun"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_missing_kubeconfig() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("missing");
        let err = KubeRepository::new()
            .create(path.to_str().unwrap(), &PipelineRun::new("run", Default::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, EdgeError::Kubeconfig(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_unknown_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("config");
        std::fs::write(
            &path,
            r#"apiVersion: v1
kind: Config
clusters:
- name: edge
  cluster:
    server: https://127.0.0.1:6443
users:
- name: builder
  user:
    token: abc
contexts:
- name: edge
  context:
    cluster: edge
    user: builder
current-context: edge
"#,
        )
        .unwrap();

        let repository = KubeRepository::with_context("staging");
        assert_eq!(repository.context(), Some("staging"));
        assert_eq!(KubeRepository::new().context(), None);

        let err = repository
            .create(path.to_str().unwrap(), &PipelineRun::new("run", Default::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, EdgeError::Kubeconfig(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_malformed_kubeconfig() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("config");
        std::fs::write(&path, "clusters: [not, a, cluster").unwrap();
        let err = KubeRepository::new()
            .create(path.to_str().unwrap(), &PipelineRun::new("run", Default::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, EdgeError::Kubeconfig(_)), "{err:?}");
    }
}
