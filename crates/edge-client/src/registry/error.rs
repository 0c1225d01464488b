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

use thiserror::Error;

/// Error type for model registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Error talking to the model registry: {0}")]
    Communication(#[from] reqwest::Error),

    #[error("Invalid model registry URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unexpected response from the model registry: HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Registered model not found: {0}")]
    ModelNotFound(String),

    #[error("Model version not found: {0}")]
    VersionNotFound(String),

    #[error("Model artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Model version '{version}' already exists for registered model {model_id}")]
    VersionAlreadyExists { model_id: String, version: String },

    #[error("Invalid metadata value for '{key}': {reason}")]
    Metadata { key: String, reason: String },
}

impl RegistryError {
    pub fn metadata(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Metadata {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
