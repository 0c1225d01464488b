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

mod args;
mod cmd;


pub use args::{AddArgs, ListArgs};
pub(crate) use cmd::convert_images_to_table;
use clap::Parser;

use crate::cfg::runtime::RuntimeContext;
use crate::errors::EdgeCliResult;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List registered models")]
    List(ListArgs),
    #[clap(about = "Register a model version and its container image artifact")]
    Add(AddArgs),
}

pub async fn dispatch(cmd: Cmd, ctx: &RuntimeContext) -> EdgeCliResult<()> {
    match cmd {
        Cmd::List(args) => cmd::list(args, ctx).await,
        Cmd::Add(args) => cmd::add(args, ctx).await,
    }
}
