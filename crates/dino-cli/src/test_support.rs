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

use std::sync::Mutex;

use libdino::{GatewayError, NormalizedResult, RequestBody, ViewService, build_request_body};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Get {
        path: String,
    },
    Post {
        category: String,
        name: String,
        path: String,
        body: RequestBody,
    },
}

/// Records the requests it is given and answers each with `reply`.
pub struct RecordingViewService {
    pub reply: NormalizedResult,
    pub calls: Mutex<Vec<Call>>,
}

impl RecordingViewService {
    pub fn new(reply: NormalizedResult) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ViewService for RecordingViewService {
    async fn send_post(
        &self,
        category: &str,
        name: &str,
        path: &str,
        extra_fields: RequestBody,
    ) -> Result<NormalizedResult, GatewayError> {
        let body = build_request_body(category, name, extra_fields)?;
        self.calls.lock().unwrap().push(Call::Post {
            category: category.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            body,
        });
        Ok(self.reply.clone())
    }

    async fn send_get(&self, path: &str) -> Result<NormalizedResult, GatewayError> {
        self.calls.lock().unwrap().push(Call::Get {
            path: path.to_string(),
        });
        Ok(self.reply.clone())
    }
}
