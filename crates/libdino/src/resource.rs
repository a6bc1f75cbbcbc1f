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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object sent as the body of a POST to the view service.
pub type RequestBody = Map<String, Value>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("No resource name was specified - please specify one and retry")]
    MissingName,

    #[error("No resource category was specified - please specify one and retry")]
    MissingCategory,

    #[error(
        "The resource category '{0}' is not one of platform, server-instance or service-instance - please retry"
    )]
    UnknownCategory(String),
}

/// Kind of resource a request is addressed to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    Platform,
    ServerInstance,
    ServiceInstance,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Platform => "platform",
            ResourceCategory::ServerInstance => "server-instance",
            ResourceCategory::ServiceInstance => "service-instance",
        }
    }

    /// Name of the body field that carries the resource name.
    pub fn body_field(&self) -> &'static str {
        match self {
            ResourceCategory::Platform => "platformName",
            ResourceCategory::ServerInstance => "serverName",
            ResourceCategory::ServiceInstance => "serviceName",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ResourceError::MissingCategory),
            "platform" => Ok(ResourceCategory::Platform),
            "server-instance" => Ok(ResourceCategory::ServerInstance),
            "service-instance" => Ok(ResourceCategory::ServiceInstance),
            other => Err(ResourceError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    category: ResourceCategory,
    name: String,
}

impl ResourceDescriptor {
    /// The name is validated before the category, so a request missing both
    /// reports the missing name.
    pub fn new(category: &str, name: &str) -> Result<Self, ResourceError> {
        if name.is_empty() {
            return Err(ResourceError::MissingName);
        }
        let category: ResourceCategory = category.parse()?;
        Ok(Self {
            category,
            name: name.to_string(),
        })
    }

    pub fn category(&self) -> ResourceCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_body(&self) -> RequestBody {
        let mut body = RequestBody::new();
        body.insert(
            self.category.body_field().to_string(),
            Value::String(self.name.clone()),
        );
        body
    }
}

/// Builds the body for a request against a resource. Fields in `extra_fields`
/// replace the base field when the names collide.
pub fn build_request_body(
    category: &str,
    name: &str,
    extra_fields: RequestBody,
) -> Result<RequestBody, ResourceError> {
    let mut body = ResourceDescriptor::new(category, name)?.base_body();
    body.extend(extra_fields);
    Ok(body)
}
