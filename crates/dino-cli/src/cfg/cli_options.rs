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

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use libdino::{ConfigError, GatewayConfig};

use crate::output::OutputFormat;
use crate::{get, help, post};

#[derive(Parser, Debug)]
#[clap(
    name = "dino-cli",
    version,
    about = "Inspect and operate platforms, servers and services through the dino view service"
)]
pub struct CliOptions {
    #[clap(
        long,
        short = 'f',
        env = "DINO_CONFIG",
        help = "Path to TOML configuration file"
    )]
    pub config_file: Option<PathBuf>,

    #[clap(
        long,
        env = "DINO_PLATFORM_URL",
        help = "Root URL of the platform hosting the view server"
    )]
    pub platform_url: Option<String>,

    #[clap(long, env = "DINO_SERVER_NAME", help = "Name of the view server")]
    pub server_name: Option<String>,

    #[clap(long, short = 'u', env = "DINO_USER_ID", help = "Id of the logged-in user")]
    pub user_id: Option<String>,

    #[clap(long, help = "Tag of the view service, defaults to dino")]
    pub service_tag: Option<String>,

    #[clap(
        long,
        value_parser = humantime::parse_duration,
        help = "Request timeout, e.g. 30s. Requests wait indefinitely when unset"
    )]
    pub timeout: Option<Duration>,

    #[clap(long, help = "Accept self-signed or otherwise invalid TLS certificates")]
    pub accept_invalid_certs: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Json, help = "Output format")]
    pub format: OutputFormat,

    #[clap(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    #[clap(about = "GET a path under the view service root")]
    Get(get::Opts),
    #[clap(about = "POST to a path under the view service root for a platform, server or service")]
    Post(post::Opts),
    #[clap(about = "Display markdown help text in a help dialog")]
    ShowHelp(help::Opts),
}

// Values from the config file, overridden by anything given on the command
// line or in the environment.
impl TryFrom<&CliOptions> for GatewayConfig {
    type Error = ConfigError;

    fn try_from(options: &CliOptions) -> Result<Self, Self::Error> {
        let mut config = if let Some(config_path) = &options.config_file {
            GatewayConfig::load(config_path)?
        } else {
            GatewayConfig::default()
        };

        if let Some(platform_url) = &options.platform_url {
            config.platform_url = platform_url.clone();
        }
        if let Some(server_name) = &options.server_name {
            config.server_name = server_name.clone();
        }
        if let Some(user_id) = &options.user_id {
            config.user_id = user_id.clone();
        }
        if let Some(service_tag) = &options.service_tag {
            config.service_tag = service_tag.clone();
        }
        if let Some(timeout) = options.timeout {
            config.request_timeout = Some(timeout);
        }
        if options.accept_invalid_certs {
            config.accept_invalid_certs = true;
        }

        Ok(config)
    }
}
