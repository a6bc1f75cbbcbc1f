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

use libdino::{NormalizedResult, RequestBody, ViewService};

use super::Opts;
use crate::errors::CliResult;

/// `--body` fields with every `--field` applied over them.
pub fn extra_fields(opts: &Opts) -> RequestBody {
    let mut fields = opts.body.clone().unwrap_or_default();
    for (key, value) in &opts.fields {
        fields.insert(key.clone(), value.clone());
    }
    fields
}

pub async fn post(view_service: &dyn ViewService, opts: &Opts) -> CliResult<NormalizedResult> {
    let result = view_service
        .send_post(&opts.category, &opts.name, &opts.path, extra_fields(opts))
        .await?;
    Ok(result)
}
