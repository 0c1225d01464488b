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
use clap::{Parser, ValueHint};

use crate::params::ParamsArgs;

#[derive(Parser, Debug)]
pub struct ListArgs {}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    #[clap(help = "ID of the registered model.")]
    pub model_id: String,

    #[clap(help = "Name of the model version.")]
    pub version: String,

    #[clap(flatten)]
    pub params: ParamsArgs,
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    #[clap(help = "ID of the registered model.")]
    pub model_id: String,

    #[clap(help = "Name of the model version.")]
    pub version: String,

    #[clap(short, long, help = "Namespace of the PipelineRun. Defaults to the configured namespace.")]
    pub namespace: Option<String>,

    #[clap(long, value_hint = ValueHint::FilePath)]
    #[clap(help = "Kubeconfig of the build cluster. Defaults to the configured kubeconfig.")]
    pub kubeconfig: Option<String>,

    // Given parameters replace the ones stored on the model version.
    #[clap(flatten)]
    pub params: ParamsArgs,
}
