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

use std::fmt::Debug;

/// Session collaborator the gateway consults before every request.
pub trait Identity: Debug + Send + Sync + 'static {
    /// Root URL of the view service identified by `service_tag`, scoped to the
    /// current user.
    fn resolve_base_url(&self, service_tag: &str) -> String;

    /// Id of the logged-in user. Empty when nobody is logged in.
    fn current_user_id(&self) -> &str;

    fn is_authenticated(&self) -> bool {
        !self.current_user_id().is_empty()
    }
}

/// Identity of a user logged in to a view server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewServerIdentity {
    pub platform_url: String,
    pub server_name: String,
    pub user_id: String,
}

impl ViewServerIdentity {
    pub fn new(
        platform_url: impl Into<String>,
        server_name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            platform_url: platform_url.into(),
            server_name: server_name.into(),
            user_id: user_id.into(),
        }
    }
}

impl Identity for ViewServerIdentity {
    fn resolve_base_url(&self, service_tag: &str) -> String {
        format!(
            "{}/servers/{}/open-metadata/view-services/{}/users/{}",
            self.platform_url.trim_end_matches('/'),
            urlencoding::encode(&self.server_name),
            urlencoding::encode(service_tag),
            urlencoding::encode(&self.user_id),
        )
    }

    fn current_user_id(&self) -> &str {
        &self.user_id
    }
}
