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

//! # Edge model client
//!
//! This crate connects a model registry with the Tekton pipeline that builds
//! container images of models for edge deployment.
//!
//! ## Overview
//!
//! The [`EdgeClient`] provides:
//!
//! - Listing registered models and their model images
//! - Registering a model, a model version and a container image artifact in one go
//! - Reconciling an existing model version and artifact with a set of build parameters
//! - Starting a `PipelineRun` of the `aiedge-e2e` pipeline for a model version
//!
//! ## Example
//!
//! ```rust,ignore
//! use edge_client::{BuildParameters, EdgeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdgeClient::new("model-registry.example.svc:8080")?;
//!
//!     for model in client.get_models().await? {
//!         println!("{} {}", model.id, model.name);
//!     }
//!
//!     let mut params = BuildParameters::new();
//!     params.insert("s3SecretName".into(), "aws-env".into());
//!     params.insert("testDataConfigMapName".into(), "bike-rentals-test-data".into());
//!     let run = client
//!         .build_model_image("1", "v1", "edge-pipelines", "/home/me/.kube/config", Some(params))
//!         .await?;
//!     println!("started {}/{}", run.namespace, run.name);
//!     Ok(())
//! }
//! ```
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod crds;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod repository;
pub mod sdk;
pub mod types;

#[cfg(test)]
mod test;

// Re-exports for convenience
pub use error::EdgeError;
pub use registry::{HttpModelRegistry, ModelRegistry, RegistryError};
pub use repository::{KubeRepository, PipelineRunRepository};
pub use sdk::EdgeClient;
pub use types::{BuildParameters, Model, ModelImage, PipelineRun};

/// Custom property marking a model version as buildable by the edge pipeline.
pub const EDGE_COMPATIBLE_KEY: &str = "edgeCompatible";

/// Model format recorded on every artifact created by this crate.
pub const MODEL_FORMAT_NAME: &str = "ContainerImage";
