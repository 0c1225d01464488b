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

//! Public types returned by the edge client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Build parameters of a model image.
///
/// Keys are Tekton parameter names. Values are strings or arrays of strings
/// when they are meant to reach the pipeline; other JSON values are stored in
/// the registry but rejected when a PipelineRun is created.
pub type BuildParameters = BTreeMap<String, serde_json::Value>;

/// A registered model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A model version together with one of its container image artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelImage {
    /// ID of the registered model owning the version.
    pub model_id: String,
    pub name: String,
    pub description: String,
    /// Name of the model version.
    pub version: String,
    pub build_params: BuildParameters,
    /// Artifact URI. Empty when the version has no artifact or the artifact
    /// has not been built yet.
    pub uri: String,
}

/// A PipelineRun created on the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Name generated by the API server.
    pub name: String,
    pub namespace: String,
}
