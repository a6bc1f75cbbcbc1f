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

use clap::Parser;

use super::dialog::DialogChoice;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(long, short = 'f', help = "Markdown file holding the help text")]
    pub file: PathBuf,

    #[clap(long, default_value = "the dino console", help = "What the help text is about")]
    pub title: String,

    #[clap(
        long = "image",
        value_parser = parse_image_ref,
        help = "Image reference as name=uri, used to resolve ![alt](name) in the markdown. May be repeated"
    )]
    pub images: Vec<(String, String)>,

    #[clap(
        long,
        value_enum,
        help = "Close the dialog with this choice instead of prompting"
    )]
    pub choice: Option<DialogChoice>,
}

pub fn parse_image_ref(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, uri)) if !name.is_empty() && !uri.is_empty() => {
            Ok((name.to_string(), uri.to_string()))
        }
        _ => Err(format!("'{arg}' is not of the form name=uri")),
    }
}
