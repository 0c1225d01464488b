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

use clap::{Parser, ValueEnum, ValueHint};

use crate::{image, model};

#[derive(Parser, Debug)]
#[clap(name = "edge-cli")]
#[clap(about = "Register models and build edge model images")]
pub struct CliOptions {
    #[clap(long, global = true, env = "EDGE_CLI_CONFIG", value_hint = ValueHint::FilePath)]
    #[clap(help = "TOML configuration file. EDGE_* environment variables override its values.")]
    pub config: Option<PathBuf>,

    #[clap(long, global = true, value_hint = ValueHint::Url)]
    #[clap(help = "Model registry URL. http:// is assumed when no scheme is given.")]
    pub model_registry_url: Option<String>,

    #[clap(long, global = true)]
    #[clap(help = "Kubeconfig context of the build cluster. Defaults to the current context.")]
    pub kube_context: Option<String>,

    #[clap(short, long, global = true, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(long, global = true, help = "Log at debug level.")]
    pub debug: bool,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    #[default]
    AsciiTable,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Registered models", subcommand, visible_alias = "m")]
    Model(model::Cmd),
    #[clap(about = "Model images and their builds", subcommand, visible_alias = "i")]
    Image(image::Cmd),
}
