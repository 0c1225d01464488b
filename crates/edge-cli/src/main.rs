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
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::config::EdgeCliConfig;
use crate::cfg::runtime::RuntimeContext;

mod cfg;
mod errors;
mod image;
mod model;
mod output;
mod params;

const DEFAULT_LOG_FILTER: &str = "edge_client=info,edge_cli=info";
const DEBUG_LOG_FILTER: &str = "edge_client=debug,edge_cli=debug";

fn init_tracing(debug: bool) {
    let directives = match (debug, std::env::var(EnvFilter::DEFAULT_ENV)) {
        (true, _) => DEBUG_LOG_FILTER.to_string(),
        (false, Ok(directives)) => directives,
        (false, Err(_)) => DEFAULT_LOG_FILTER.to_string(),
    };
    let env_filter = EnvFilter::builder().parse_lossy(directives);

    // stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = CliOptions::parse();
    init_tracing(options.debug);

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    let config = EdgeCliConfig::load(options.config.as_deref())?.with_overrides(&options);
    tracing::debug!(?config, "Loaded configuration");

    let ctx = RuntimeContext::new(config, options.format)?;
    match options.commands {
        CliCommand::Model(cmd) => model::dispatch(cmd, &ctx).await?,
        CliCommand::Image(cmd) => image::dispatch(cmd, &ctx).await?,
    }
    Ok(())
}
