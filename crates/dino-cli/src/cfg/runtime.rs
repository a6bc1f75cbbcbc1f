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

use libdino::ViewService;

use crate::output::OutputFormat;

// RuntimeContext is passed to every command dispatcher.
pub struct RuntimeContext {
    pub view_service: Arc<dyn ViewService>,
    pub config: RuntimeConfig,
}

// RuntimeConfig holds the options downstream command
// handlers need from the top-level command line.
pub struct RuntimeConfig {
    pub format: OutputFormat,
}
