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
use edge_client::{EdgeClient, HttpModelRegistry, KubeRepository};

use super::cli_options::OutputFormat;
use super::config::EdgeCliConfig;
use crate::errors::{EdgeCliError, EdgeCliResult};

/// Everything a command needs to run.
pub struct RuntimeContext {
    pub client: EdgeClient<HttpModelRegistry>,
    pub config: EdgeCliConfig,
    pub format: OutputFormat,
}

impl RuntimeContext {
    pub fn new(config: EdgeCliConfig, format: OutputFormat) -> EdgeCliResult<Self> {
        let pipelines = match &config.kube_context {
            Some(context) => KubeRepository::with_context(context.as_str()),
            None => KubeRepository::new(),
        };
        let client = EdgeClient::with_timeout(&config.model_registry_url, config.request_timeout)?
            .with_pipelines(pipelines);
        tracing::debug!(
            url = %client.registry().api_url(),
            "Using model registry"
        );
        Ok(Self {
            client,
            config,
            format,
        })
    }

    /// Kubeconfig given on the command line, or the configured one.
    pub fn kube_context(&self) -> Option<&str> {
        self.client.pipelines().context()
    }

    pub fn kubeconfig(&self, flag: Option<&str>) -> EdgeCliResult<String> {
        if let Some(path) = flag {
            return Ok(path.to_string());
        }
        self.config
            .kubeconfig_path()
            .map(|p| p.to_string_lossy().into_owned())
            .ok_or_else(|| {
                EdgeCliError::GenericError(
                    "no kubeconfig found; pass --kubeconfig or set KUBECONFIG".to_string(),
                )
            })
    }
}
