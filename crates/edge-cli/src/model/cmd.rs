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
use edge_client::{Model, ModelImage};
use prettytable::{Table, row};

use super::args::{AddArgs, ListArgs};
use crate::cfg::runtime::RuntimeContext;
use crate::errors::EdgeCliResult;
use crate::output::{format_build_params, print};

pub(crate) fn convert_models_to_table(models: &[Model]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Description"]);
    for model in models {
        table.add_row(row![model.id, model.name, model.description]);
    }
    table
}

pub(crate) fn convert_images_to_table(images: &[ModelImage]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Model ID",
        "Name",
        "Version",
        "URI",
        "Build Parameters"
    ]);
    for image in images {
        table.add_row(row![
            image.model_id,
            image.name,
            image.version,
            image.uri,
            format_build_params(&image.build_params),
        ]);
    }
    table
}

pub async fn list(_args: ListArgs, ctx: &RuntimeContext) -> EdgeCliResult<()> {
    let models = ctx.client.get_models().await?;
    print(ctx.format, &models, || convert_models_to_table(&models))
}

pub async fn add(args: AddArgs, ctx: &RuntimeContext) -> EdgeCliResult<()> {
    let parameters = args.params.into_parameters()?.unwrap_or_default();
    let image = ctx
        .client
        .add_new_model_with_image(
            &args.name,
            &args.description,
            &args.version,
            &args.uri,
            parameters,
        )
        .await?;
    tracing::info!(model_id = %image.model_id, version = %image.version, "Added model image");
    print(ctx.format, &image, || {
        convert_images_to_table(std::slice::from_ref(&image))
    })
}
