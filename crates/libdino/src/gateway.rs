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

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::GatewayError;
use crate::config::{DEFAULT_SERVICE_TAG, GatewayConfig};
use crate::identity::Identity;
use crate::resource::{self, RequestBody};
use crate::result::{HttpFailure, NormalizedResult};

const LIBDINO_USER_AGENT: &str = concat!("libdino/", env!("CARGO_PKG_VERSION"));
const LOG_BODY_LIMIT: usize = 1500;

/// Receives the result of a request. Called at most once.
pub type ResultCallback = Box<dyn FnOnce(NormalizedResult) + Send>;

/// Requests against the view service. Implemented by [`RequestGateway`];
/// callers take `&dyn ViewService` so a fake can stand in for it.
#[async_trait::async_trait]
pub trait ViewService: Send + Sync + 'static {
    async fn send_post(
        &self,
        category: &str,
        name: &str,
        path: &str,
        extra_fields: RequestBody,
    ) -> Result<NormalizedResult, GatewayError>;

    async fn send_get(&self, path: &str) -> Result<NormalizedResult, GatewayError>;

    /// Like [`ViewService::send_post`], delivering the result to `callback`.
    /// On error the callback is dropped without being called.
    async fn send_post_with(
        &self,
        category: &str,
        name: &str,
        path: &str,
        extra_fields: RequestBody,
        callback: ResultCallback,
    ) -> Result<(), GatewayError> {
        let result = self.send_post(category, name, path, extra_fields).await?;
        callback(result);
        Ok(())
    }

    async fn send_get_with(
        &self,
        path: &str,
        callback: ResultCallback,
    ) -> Result<(), GatewayError> {
        let result = self.send_get(path).await?;
        callback(result);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct RequestGatewayBuilder {
    service_tag: String,
    timeout: Option<Duration>,
    accept_invalid_certs: bool,
}

impl RequestGatewayBuilder {
    pub fn service_tag(mut self, service_tag: impl Into<String>) -> Self {
        self.service_tag = service_tag.into();
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn build(self, identity: Arc<dyn Identity>) -> Result<RequestGateway, GatewayError> {
        let mut builder =
            ClientBuilder::new().danger_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(RequestGateway {
            client,
            identity,
            service_tag: self.service_tag,
        })
    }
}

/// Issues requests to the view service on behalf of the identity it was built
/// with. Each call is one request/response exchange: no retries, no
/// de-duplication. Clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct RequestGateway {
    client: HttpClient,
    identity: Arc<dyn Identity>,
    service_tag: String,
}

impl RequestGateway {
    pub fn builder() -> RequestGatewayBuilder {
        RequestGatewayBuilder {
            service_tag: DEFAULT_SERVICE_TAG.to_string(),
            timeout: None,
            accept_invalid_certs: false,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        Self::builder()
            .service_tag(config.service_tag.clone())
            .timeout(config.request_timeout)
            .accept_invalid_certs(config.accept_invalid_certs)
            .build(Arc::new(config.identity()))
    }

    pub fn identity(&self) -> &dyn Identity {
        self.identity.as_ref()
    }

    pub fn service_tag(&self) -> &str {
        &self.service_tag
    }

    pub fn build_request_body(
        &self,
        category: &str,
        name: &str,
        extra_fields: RequestBody,
    ) -> Result<RequestBody, GatewayError> {
        Ok(resource::build_request_body(category, name, extra_fields)?)
    }

    /// Full URL for `path` under the view service root. A leading `/` on
    /// `path` is dropped.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.identity.resolve_base_url(&self.service_tag),
            path.trim_start_matches('/')
        )
    }

    fn require_session(&self) -> Result<(), GatewayError> {
        if self.identity.is_authenticated() {
            Ok(())
        } else {
            warn!("Refusing view service request: no user is logged in");
            Err(GatewayError::Unauthenticated)
        }
    }

    async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<&RequestBody>,
    ) -> Result<NormalizedResult, GatewayError> {
        let url = self.url(path);

        let body_enc = match body {
            Some(b) => {
                let body_enc =
                    serde_json::to_string(b).map_err(|e| GatewayError::JsonSerializeError {
                        url: url.clone(),
                        source: e,
                    })?;
                Some(body_enc)
            }
            None => None,
        };

        let mut req_b = self.client.request(method.clone(), &url);
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("application/json"));
        req_b = req_b.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static(LIBDINO_USER_AGENT));
        if let Some(b) = body_enc {
            debug!("TX {method} {url} {}", truncate(&b, LOG_BODY_LIMIT));
            req_b = req_b.body(b);
        } else {
            debug!("TX {method} {url}");
        }

        let response = req_b.send().await.map_err(|e| GatewayError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        let request_url = response.url().to_string();

        let response_body = response.text().await.map_err(|e| GatewayError::NoContent {
            url: request_url.clone(),
            source: e,
        })?;
        debug!("RX {status_code} {}", truncate(&response_body, LOG_BODY_LIMIT));

        if !status_code.is_success() {
            return Ok(NormalizedResult::HttpFailure(HttpFailure {
                related_http_code: status_code.as_u16(),
                request_url,
                exception_error_message: response_body,
            }));
        }

        if response_body.trim().is_empty() {
            return Ok(NormalizedResult::Success(Value::Null));
        }
        match serde_json::from_str(&response_body) {
            Ok(v) => Ok(NormalizedResult::Success(v)),
            Err(e) => Err(GatewayError::JsonDeserializeError {
                url: request_url,
                body: response_body,
                source: e,
            }),
        }
    }
}

#[async_trait::async_trait]
impl ViewService for RequestGateway {
    async fn send_post(
        &self,
        category: &str,
        name: &str,
        path: &str,
        extra_fields: RequestBody,
    ) -> Result<NormalizedResult, GatewayError> {
        self.require_session()?;
        let body = self.build_request_body(category, name, extra_fields)?;
        self.exchange(Method::POST, path, Some(&body)).await
    }

    async fn send_get(&self, path: &str) -> Result<NormalizedResult, GatewayError> {
        self.require_session()?;
        self.exchange(Method::GET, path, None).await
    }
}

fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ViewServerIdentity;

    fn gateway(user_id: &str) -> RequestGateway {
        RequestGateway::builder()
            .build(Arc::new(ViewServerIdentity::new(
                "http://localhost:9443/",
                "view1",
                user_id,
            )))
            .unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let gw = gateway("u1");
        assert_eq!(
            gw.url("platform/platforms"),
            "http://localhost:9443/servers/view1/open-metadata/view-services/dino/users/u1/platform/platforms"
        );
        assert_eq!(gw.url("/platform/platforms"), gw.url("platform/platforms"));
    }

    #[test]
    fn service_tag_can_be_overridden() {
        let gw = RequestGateway::builder()
            .service_tag("tex")
            .build(Arc::new(ViewServerIdentity::new("http://h", "v", "u")))
            .unwrap();
        assert_eq!(gw.service_tag(), "tex");
        assert_eq!(
            gw.url("types"),
            "http://h/servers/v/open-metadata/view-services/tex/users/u/types"
        );
    }

    #[test]
    fn from_config_uses_configured_identity() {
        let config = GatewayConfig {
            user_id: "garygeeke".to_string(),
            ..Default::default()
        };
        let gw = RequestGateway::from_config(&config).unwrap();
        assert_eq!(gw.identity().current_user_id(), "garygeeke");
        assert_eq!(gw.service_tag(), "dino");
    }

    #[test]
    fn require_session_rejects_empty_user() {
        assert!(matches!(
            gateway("").require_session(),
            Err(GatewayError::Unauthenticated)
        ));
        assert!(gateway("u1").require_session().is_ok());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("", 3), "");
    }
}
