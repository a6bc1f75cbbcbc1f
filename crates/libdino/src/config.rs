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

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::identity::ViewServerIdentity;

pub const DEFAULT_SERVICE_TAG: &str = "dino";
const DEFAULT_PLATFORM_URL: &str = "https://localhost:9443";
const DEFAULT_SERVER_NAME: &str = "view-server";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    #[serde(default = "Defaults::platform_url")]
    pub platform_url: String,
    #[serde(default = "Defaults::server_name")]
    pub server_name: String,
    /// Empty means no user is logged in; every request is refused.
    #[serde(default)]
    pub user_id: String,
    #[serde(default = "Defaults::service_tag")]
    pub service_tag: String,
    /// Requests never time out unless this is set.
    #[serde(default, with = "humantime_serde")]
    pub request_timeout: Option<Duration>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

pub struct Defaults;

impl Defaults {
    pub fn platform_url() -> String {
        DEFAULT_PLATFORM_URL.to_string()
    }
    pub fn server_name() -> String {
        DEFAULT_SERVER_NAME.to_string()
    }
    pub fn service_tag() -> String {
        DEFAULT_SERVICE_TAG.to_string()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            platform_url: Defaults::platform_url(),
            server_name: Defaults::server_name(),
            user_id: String::new(),
            service_tag: Defaults::service_tag(),
            request_timeout: None,
            accept_invalid_certs: false,
        }
    }
}

impl GatewayConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    pub fn identity(&self) -> ViewServerIdentity {
        ViewServerIdentity::new(&self.platform_url, &self.server_name, &self.user_id)
    }
}
