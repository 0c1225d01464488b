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

//! Repository traits for Kubernetes operations.

use async_trait::async_trait;

use crate::crds::pipelineruns::PipelineRun;
use crate::error::EdgeError;

/// Repository for Tekton PipelineRun resources.
#[async_trait]
pub trait PipelineRunRepository: Send + Sync {
    /// Create `run` in its own namespace on the cluster described by the
    /// kubeconfig file at `kube_config`, returning the stored object.
    async fn create(&self, kube_config: &str, run: &PipelineRun)
    -> Result<PipelineRun, EdgeError>;
}
