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
use edge_client::{BuildParameters, PipelineRun};
use prettytable::{Table, row};

use super::args::{BuildArgs, ListArgs, UpdateArgs};
use crate::cfg::runtime::RuntimeContext;
use crate::errors::EdgeCliResult;
use crate::model::convert_images_to_table;
use crate::output::print;

pub(crate) fn convert_params_to_table(params: &BuildParameters) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Parameter", "Value"]);
    for (key, value) in params {
        match value {
            serde_json::Value::String(s) => table.add_row(row![key, s]),
            other => table.add_row(row![key, other]),
        };
    }
    table
}

pub(crate) fn convert_run_to_table(run: &PipelineRun) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["PipelineRun", "Namespace"]);
    table.add_row(row![run.name, run.namespace]);
    table
}

pub async fn list(_args: ListArgs, ctx: &RuntimeContext) -> EdgeCliResult<()> {
    let images = ctx.client.get_model_images().await?;
    print(ctx.format, &images, || convert_images_to_table(&images))
}

pub async fn update(args: UpdateArgs, ctx: &RuntimeContext) -> EdgeCliResult<()> {
    let parameters = args.params.into_parameters()?;
    let params = ctx
        .client
        .update_model_image(&args.model_id, &args.version, parameters)
        .await?;
    print(ctx.format, &params, || convert_params_to_table(&params))
}

pub async fn build(args: BuildArgs, ctx: &RuntimeContext) -> EdgeCliResult<()> {
    let namespace = args
        .namespace
        .unwrap_or_else(|| ctx.config.namespace.clone());
    let kubeconfig = ctx.kubeconfig(args.kubeconfig.as_deref())?;
    let parameters = args.params.into_parameters()?;
    tracing::debug!(
        kubeconfig = %kubeconfig,
        context = ctx.kube_context().unwrap_or("<current>"),
        "Using build cluster"
    );

    let run = ctx
        .client
        .build_model_image(
            &args.model_id,
            &args.version,
            &namespace,
            &kubeconfig,
            parameters,
        )
        .await?;
    tracing::info!(name = %run.name, namespace = %run.namespace, "Started model image build");
    print(ctx.format, &run, || convert_run_to_table(&run))
}
