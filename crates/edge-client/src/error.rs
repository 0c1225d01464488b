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

//! Error types for the edge client.

use thiserror::Error;

use crate::registry::RegistryError;

/// Error type for edge client operations.
#[derive(Error, Debug)]
pub enum EdgeError {
    #[error("{0}")]
    InvalidInput(String),

    /// A registry call failed; `context` names the operation that was running.
    #[error("{context}: {source}")]
    Registry {
        context: String,
        #[source]
        source: RegistryError,
    },

    /// Wraps a nested failure with the operation that was running.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<EdgeError>,
    },

    #[error("{0} pipeline parameter is required")]
    MissingParameter(&'static str),

    #[error("{name} pipeline parameter must be {expected}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
    },

    #[error("parameter {name} has unsupported type {kind}")]
    UnsupportedParameter { name: String, kind: &'static str },

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("Kubernetes client error: {0}")]
    KubeError(#[from] kube::Error),
}

impl EdgeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn registry(context: impl Into<String>, source: RegistryError) -> Self {
        Self::Registry {
            context: context.into(),
            source,
        }
    }

    /// Wrap `self` with the operation that was running when it occurred.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The registry error at the bottom of the context chain, if any.
    pub fn registry_error(&self) -> Option<&RegistryError> {
        match self {
            Self::Registry { source, .. } => Some(source),
            Self::Context { source, .. } => source.registry_error(),
            _ => None,
        }
    }

    pub fn is_model_not_found(&self) -> bool {
        matches!(self.registry_error(), Some(RegistryError::ModelNotFound(_)))
    }

    pub fn is_version_not_found(&self) -> bool {
        matches!(
            self.registry_error(),
            Some(RegistryError::VersionNotFound(_))
        )
    }

    pub fn is_artifact_not_found(&self) -> bool {
        matches!(
            self.registry_error(),
            Some(RegistryError::ArtifactNotFound(_))
        )
    }
}

/// Attach a context message to registry results, mirroring how every façade
/// operation reports which step failed.
pub(crate) trait RegistryResultExt<T> {
    fn context(self, context: &str) -> Result<T, EdgeError>;
}

impl<T> RegistryResultExt<T> for Result<T, RegistryError> {
    fn context(self, context: &str) -> Result<T, EdgeError> {
        self.map_err(|e| EdgeError::registry(context, e))
    }
}
