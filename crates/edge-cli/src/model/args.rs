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
use clap::Parser;

use crate::params::ParamsArgs;

#[derive(Parser, Debug)]
pub struct ListArgs {}

#[derive(Parser, Debug)]
pub struct AddArgs {
    #[clap(help = "Name of the registered model. Reused when it already exists.")]
    pub name: String,

    #[clap(help = "Name of the new model version.")]
    pub version: String,

    #[clap(short, long, help = "Model description.")]
    pub description: String,

    #[clap(long, default_value = "", help = "Container image URI, if already built.")]
    pub uri: String,

    #[clap(flatten)]
    pub params: ParamsArgs,
}
