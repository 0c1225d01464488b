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
//! Build parameters given on the command line.

use std::path::{Path, PathBuf};

use clap::{Args, ValueHint};
use edge_client::BuildParameters;

use crate::errors::{EdgeCliError, EdgeCliResult};

#[derive(Args, Debug, Default, Clone)]
pub struct ParamsArgs {
    #[clap(
        long = "param",
        value_name = "KEY=VALUE",
        value_parser = parse_param,
        help = "Build parameter. May be repeated; wins over --params-file."
    )]
    pub params: Vec<(String, String)>,

    #[clap(long, value_hint = ValueHint::FilePath)]
    #[clap(help = "JSON or YAML file with a map of build parameters.")]
    pub params_file: Option<PathBuf>,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid parameter '{s}': expected KEY=VALUE")),
    }
}

impl ParamsArgs {
    /// `None` when neither `--param` nor `--params-file` was given.
    pub fn into_parameters(self) -> EdgeCliResult<Option<BuildParameters>> {
        if self.params.is_empty() && self.params_file.is_none() {
            return Ok(None);
        }

        let mut parameters = match &self.params_file {
            Some(path) => read_params_file(path)?,
            None => BuildParameters::new(),
        };
        for (key, value) in self.params {
            parameters.insert(key, serde_json::Value::String(value));
        }
        Ok(Some(parameters))
    }
}

fn read_params_file(path: &Path) -> EdgeCliResult<BuildParameters> {
    let text = std::fs::read_to_string(path).map_err(|source| EdgeCliError::ParamsFile {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(&text)?)
    } else {
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;
    use temp_dir::TempDir;

    use super::*;

    #[derive(Parser, Debug)]
    struct Opts {
        #[clap(flatten)]
        params: ParamsArgs,
    }

    fn parse(args: &[&str]) -> ParamsArgs {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        Opts::try_parse_from(argv).expect("should parse").params
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(parse(&[]).into_parameters().unwrap(), None);
    }

    #[test]
    fn test_param_values_keep_commas_and_equals() {
        let params = parse(&[
            "--param",
            "s3SecretName=aws-env",
            "--param",
            "extraArgs=a,b=c",
        ])
        .into_parameters()
        .unwrap()
        .unwrap();

        assert_eq!(params["s3SecretName"], json!("aws-env"));
        assert_eq!(params["extraArgs"], json!("a,b=c"));
    }

    #[test]
    fn test_param_requires_key() {
        assert!(Opts::try_parse_from(["test", "--param", "=value"]).is_err());
        assert!(Opts::try_parse_from(["test", "--param", "novalue"]).is_err());
    }

    #[test]
    fn test_yaml_file_with_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("params.yaml");
        std::fs::write(
            &path,
            "s3SecretName: aws-env\n\
             testDataConfigMapName: bike-rentals-test-data\n\
             extraTags:\n  - latest\n  - edge\n",
        )
        .unwrap();

        let params = parse(&[
            "--params-file",
            path.to_str().unwrap(),
            "--param",
            "s3SecretName=other-creds",
        ])
        .into_parameters()
        .unwrap()
        .unwrap();

        assert_eq!(params["s3SecretName"], json!("other-creds"));
        assert_eq!(params["testDataConfigMapName"], json!("bike-rentals-test-data"));
        assert_eq!(params["extraTags"], json!(["latest", "edge"]));
    }

    #[test]
    fn test_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("params.json");
        std::fs::write(&path, r#"{"s3SecretName": "aws-env", "replicas": 2}"#).unwrap();

        let params = parse(&["--params-file", path.to_str().unwrap()])
            .into_parameters()
            .unwrap()
            .unwrap();
        assert_eq!(params["replicas"], json!(2));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("missing.yaml");
        let err = parse(&["--params-file", path.to_str().unwrap()])
            .into_parameters()
            .unwrap_err();
        assert!(matches!(err, EdgeCliError::ParamsFile { .. }), "{err:?}");
    }
}
