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

use clap::{CommandFactory, Parser};
use libdino::NormalizedResult;
use serde_json::json;

use super::args::*;
use super::cmds;
use crate::test_support::{Call, RecordingViewService};

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

#[test]
fn parse_requires_path() {
    assert!(Opts::try_parse_from(["get"]).is_err());
    let opts = Opts::try_parse_from(["get", "platform/platforms"]).expect("should parse get");
    assert_eq!(opts.path, "platform/platforms");
}

#[tokio::test]
async fn get_passes_path_and_returns_result() {
    let service = RecordingViewService::new(NormalizedResult::Success(json!({"x": 1})));
    let opts = Opts {
        path: "foo".to_string(),
    };

    let result = cmds::get(&service, &opts).await.unwrap();

    assert_eq!(result, NormalizedResult::Success(json!({"x": 1})));
    assert_eq!(
        service.calls(),
        vec![Call::Get {
            path: "foo".to_string()
        }]
    );
}
