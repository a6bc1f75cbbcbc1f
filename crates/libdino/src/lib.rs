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

//! Client for the dino view service.
//!
//! [`RequestGateway`] issues GET and POST requests on behalf of a logged-in
//! [`Identity`] and hands back every response as a [`NormalizedResult`]:
//! either the decoded JSON body, or an [`HttpFailure`] record for non-2xx
//! responses. Problems detected before a request goes out (no session, bad
//! resource name or category) and transport or decode failures are returned
//! as [`GatewayError`].

pub mod config;
mod gateway;
pub mod identity;
pub mod resource;
pub mod result;

pub use config::{ConfigError, GatewayConfig};
pub use gateway::{RequestGateway, RequestGatewayBuilder, ResultCallback, ViewService};
pub use identity::{Identity, ViewServerIdentity};
pub use resource::{
    RequestBody, ResourceCategory, ResourceDescriptor, ResourceError, build_request_body,
};
pub use result::{HttpFailure, NormalizedResult};

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("There is no user context, please log in")]
    Unauthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ResourceError),

    #[error("Network error talking to view service at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("Could not read response body from {url}. {source}")]
    NoContent { url: String, source: reqwest::Error },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize request body for {url}. {source}")]
    JsonSerializeError {
        url: String,
        source: serde_json::Error,
    },

    #[error("Reqwest error: '{0}'")]
    ReqwestError(#[from] reqwest::Error),
}

impl GatewayError {
    /// True when the request was refused before anything was sent.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            GatewayError::Unauthenticated
                | GatewayError::InvalidInput(_)
                | GatewayError::JsonSerializeError { .. }
        )
    }
}
