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
use libdino::RequestBody;
use serde_json::Value;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(
        long,
        short = 'c',
        help = "Resource category: platform, server-instance or service-instance"
    )]
    pub category: String,

    #[clap(long, short = 'n', help = "Name of the platform, server or service")]
    pub name: String,

    #[clap(help = "Path under the view service root, e.g. platform/servers/active")]
    pub path: String,

    #[clap(
        long = "field",
        value_parser = parse_field,
        help = "Extra body field as key=value. Values that parse as JSON are sent as JSON, anything else as a string. May be repeated"
    )]
    pub fields: Vec<(String, Value)>,

    #[clap(
        long,
        value_parser = parse_body,
        help = "Extra body fields as a JSON object. --field entries take precedence"
    )]
    pub body: Option<RequestBody>,
}

pub fn parse_field(arg: &str) -> Result<(String, Value), String> {
    let Some((key, raw)) = arg.split_once('=') else {
        return Err(format!("'{arg}' is not of the form key=value"));
    };
    if key.is_empty() {
        return Err(format!("'{arg}' has an empty key"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

pub fn parse_body(arg: &str) -> Result<RequestBody, String> {
    match serde_json::from_str::<Value>(arg) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("the body must be a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {e}")),
    }
}
