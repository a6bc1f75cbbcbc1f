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

use tokio::io::{AsyncBufReadExt, BufReader};

use super::Opts;
use super::dialog::{
    DialogChoice, HelpContent, HelpDialog, HelpHandler, ImageRefs, Portal, parse_choice,
};
use crate::errors::{CliError, CliResult};

pub async fn load_content(opts: &Opts) -> CliResult<HelpContent> {
    let markdown = tokio::fs::read_to_string(&opts.file)
        .await
        .map_err(|error| CliError::HelpFile {
            path: opts.file.to_string_lossy().to_string(),
            error,
        })?;
    Ok(HelpContent {
        markdown: Some(markdown),
    })
}

pub fn build_dialog(opts: &Opts, content: &HelpContent) -> HelpDialog {
    let images: ImageRefs = opts.images.iter().cloned().collect();
    HelpDialog::new(&opts.title, content, &images)
}

pub async fn show_help<P: Portal>(portal: &mut P, opts: &Opts) -> CliResult<DialogChoice> {
    let content = load_content(opts).await?;
    let dialog = build_dialog(opts, &content);
    let handler = HelpHandler::open(portal, &dialog)?;

    let choice = match opts.choice {
        Some(choice) => choice,
        None => {
            let mut line = String::new();
            BufReader::new(tokio::io::stdin())
                .read_line(&mut line)
                .await?;
            parse_choice(&line)
        }
    };
    tracing::debug!(?choice, "help dialog closed");
    Ok(handler.close(choice)?)
}
