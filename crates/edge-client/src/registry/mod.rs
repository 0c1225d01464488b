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

//! Model registry access.
//!
//! [`ModelRegistry`] is the set of registry calls the edge client makes;
//! [`HttpModelRegistry`] implements it over REST.

mod error;
mod http;
pub mod metadata;
pub mod models;
mod traits;

pub use error::RegistryError;
pub use http::{DEFAULT_TIMEOUT, HttpModelRegistry};
pub use metadata::{from_metadata_value_map, to_metadata_value_map};
pub use models::{
    MetadataValue, MetadataValueMap, ModelArtifact, ModelArtifactCreate, ModelVersion,
    RegisteredModel,
};
pub use traits::ModelRegistry;
