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

#![allow(dead_code)]

use std::sync::Arc;

use libdino::{RequestGateway, ViewServerIdentity};

pub const SERVER_NAME: &str = "view1";
pub const USER_ID: &str = "garygeeke";

pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

pub async fn create_mock_http_server() -> mockito::ServerGuard {
    mockito::Server::new_async().await
}

/// Server path under which the gateway places `path` for the test identity.
pub fn service_path(path: &str) -> String {
    format!("/servers/{SERVER_NAME}/open-metadata/view-services/dino/users/{USER_ID}/{path}")
}

pub async fn add_mock(
    server: &mut mockito::ServerGuard,
    path: &str,
    response_body: &str,
    method: &Method,
    status_code: usize,
) -> mockito::Mock {
    let content_type = if (200..300).contains(&status_code) {
        "application/json"
    } else {
        "text/plain"
    };
    server
        .mock(method.as_str(), service_path(path).as_str())
        .with_status(status_code)
        .with_header("content-type", content_type)
        .with_body(response_body)
        .create_async()
        .await
}

pub fn gateway_for(server: &mockito::ServerGuard) -> RequestGateway {
    gateway_with_user(server, USER_ID)
}

pub fn gateway_with_user(server: &mockito::ServerGuard, user_id: &str) -> RequestGateway {
    RequestGateway::builder()
        .build(Arc::new(ViewServerIdentity::new(
            server.url(),
            SERVER_NAME,
            user_id,
        )))
        .expect("gateway should build")
}
