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

use crate::cfg::cli_options::CliCommand;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

// Dispatch is implemented by every command type. It runs the
// command against the runtime context built in main.
pub(crate) trait Dispatch {
    fn dispatch(self, ctx: RuntimeContext) -> impl std::future::Future<Output = CliResult<()>>;
}

impl Dispatch for CliCommand {
    async fn dispatch(self, ctx: RuntimeContext) -> CliResult<()> {
        match self {
            CliCommand::Get(opts) => opts.dispatch(ctx).await,
            CliCommand::Post(opts) => opts.dispatch(ctx).await,
            CliCommand::ShowHelp(opts) => opts.dispatch(ctx).await,
        }
    }
}
