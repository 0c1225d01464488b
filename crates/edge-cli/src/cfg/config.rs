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
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use super::cli_options::CliOptions;
use crate::errors::EdgeCliResult;

const ENV_PREFIX: &str = "EDGE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeCliConfig {
    /// Model registry URL, with or without scheme
    pub model_registry_url: String,

    /// Namespace PipelineRuns are created in
    pub namespace: String,

    /// Kubeconfig used to create PipelineRuns. Falls back to `$KUBECONFIG`
    /// and `~/.kube/config`.
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context; the current context when unset
    pub kube_context: Option<String>,

    /// Timeout of each model registry request
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for EdgeCliConfig {
    fn default() -> Self {
        Self {
            model_registry_url: "http://localhost:8080".to_string(),
            namespace: "default".to_string(),
            kubeconfig: None,
            kube_context: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl EdgeCliConfig {
    /// Load defaults, then the TOML file at `config_path`, then `EDGE_*`
    /// environment variables.
    pub fn load(config_path: Option<&Path>) -> EdgeCliResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        Ok(figment.extract()?)
    }

    /// Command line flags take precedence over every other source.
    pub fn with_overrides(mut self, options: &CliOptions) -> Self {
        if let Some(url) = &options.model_registry_url {
            self.model_registry_url = url.clone();
        }
        if let Some(context) = &options.kube_context {
            self.kube_context = Some(context.clone());
        }
        self
    }

    pub fn kubeconfig_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.kubeconfig {
            return Some(path.clone());
        }
        // Only the first entry of a KUBECONFIG list is read.
        if let Some(first) = std::env::var_os("KUBECONFIG")
            .as_ref()
            .and_then(|paths| std::env::split_paths(paths).next())
            .filter(|p| !p.as_os_str().is_empty())
        {
            return Some(first);
        }
        let default = PathBuf::from(std::env::var_os("HOME")?).join(".kube/config");
        default.exists().then_some(default)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn from_toml(toml: &str) -> EdgeCliConfig {
        Figment::new()
            .merge(Serialized::defaults(EdgeCliConfig::default()))
            .merge(Toml::string(toml))
            .extract()
            .expect("could not parse config toml")
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");
        assert_eq!(config, EdgeCliConfig::default());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_parse_config() {
        let config = from_toml(
            r#"
model_registry_url = "https://model-registry.edge.svc:8443"
namespace = "edge-builds"
kubeconfig = "/etc/edge/kubeconfig"
kube_context = "edge-builds-admin"
request_timeout = "1m 30s"
"#,
        );

        assert_eq!(
            config.model_registry_url,
            "https://model-registry.edge.svc:8443"
        );
        assert_eq!(config.namespace, "edge-builds");
        assert_eq!(config.kubeconfig_path(), Some(PathBuf::from("/etc/edge/kubeconfig")));
        assert_eq!(config.kube_context.as_deref(), Some("edge-builds-admin"));
        assert_eq!(config.request_timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_load_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("edge.toml");
        std::fs::write(&path, "namespace = \"from-file\"\n").unwrap();

        let config = EdgeCliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.namespace, "from-file");
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Figment::new()
            .merge(Serialized::defaults(EdgeCliConfig::default()))
            .merge(Toml::string("request_timeout = \"soon\""))
            .extract::<EdgeCliConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("request_timeout"), "{err}");
    }

    #[test]
    fn test_command_line_wins() {
        let options = CliOptions::try_parse_from([
            "edge-cli",
            "--model-registry-url",
            "registry.local:8080",
            "image",
            "build",
            "1",
            "v1",
            "--kube-context",
            "staging",
        ])
        .unwrap();

        let config = from_toml(
            "model_registry_url = \"http://other:8080\"\nkube_context = \"edge\"",
        )
        .with_overrides(&options);
        assert_eq!(config.model_registry_url, "registry.local:8080");
        assert_eq!(config.kube_context.as_deref(), Some("staging"));
    }
}
