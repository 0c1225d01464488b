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
//! Rendering command results.

use edge_client::BuildParameters;
use prettytable::Table;
use serde::Serialize;

use crate::cfg::cli_options::OutputFormat;
use crate::errors::EdgeCliResult;

/// Print `value` as JSON or YAML, or the table built by `table`.
pub fn print<T, F>(format: OutputFormat, value: &T, table: F) -> EdgeCliResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Table,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(value)?),
        OutputFormat::AsciiTable => table().printstd(),
    }
    Ok(())
}

/// One `key=value` line per build parameter. Non-string values are shown as JSON.
pub fn format_build_params(params: &BuildParameters) -> String {
    params
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
