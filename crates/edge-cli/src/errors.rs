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

use std::path::PathBuf;

use edge_client::EdgeError;

#[derive(thiserror::Error, Debug)]
pub enum EdgeCliError {
    #[error(transparent)]
    Edge(#[from] EdgeError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Failed to read parameters file {path}: {source}")]
    ParamsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("{0}")]
    GenericError(String),
}

impl From<figment::Error> for EdgeCliError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

pub type EdgeCliResult<T> = Result<T, EdgeCliError>;
