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

use libdino::NormalizedResult;
use prettytable::{Cell, Row, Table, row};
use serde_json::Value;

use crate::errors::{CliError, CliResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

pub fn render(result: &NormalizedResult, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Table => Ok(render_table(&result.clone().into_json())),
    }
}

/// Prints `result` and turns an error result into a failing exit.
pub fn emit(result: &NormalizedResult, format: OutputFormat) -> CliResult<()> {
    println!("{}", render(result, format)?);
    match result.related_http_code() {
        Some(code) if result.is_error() => Err(CliError::RequestFailed { code }),
        _ => Ok(()),
    }
}

fn render_table(value: &Value) -> String {
    let mut table = Table::new();
    table.set_titles(row!["Property", "Value"]);
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                table.add_row(Row::new(vec![Cell::new(key), Cell::new(&cell_text(v))]));
            }
        }
        other => {
            table.add_row(Row::new(vec![
                Cell::new("value"),
                Cell::new(&cell_text(other)),
            ]));
        }
    }
    table.to_string()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use libdino::HttpFailure;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_output_is_the_normalized_shape() {
        let result = NormalizedResult::HttpFailure(HttpFailure {
            related_http_code: 404,
            request_url: "http://h/foo".to_string(),
            exception_error_message: "not found".to_string(),
        });
        let rendered = render(&result, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            json!({
                "relatedHTTPCode": 404,
                "requestURL": "http://h/foo",
                "exceptionErrorMessage": "not found",
            })
        );
    }

    #[test]
    fn table_output_lists_top_level_fields() {
        let result = NormalizedResult::Success(json!({"platformName": "p1", "active": true}));
        let rendered = render(&result, OutputFormat::Table).unwrap();
        assert!(rendered.contains("Property"));
        assert!(rendered.contains("platformName"));
        assert!(rendered.contains("p1"));
        assert!(rendered.contains("active"));
        assert!(rendered.contains("true"));
    }

    #[test]
    fn emit_fails_on_error_results() {
        let failed = NormalizedResult::Success(json!({"relatedHTTPCode": 400}));
        assert!(matches!(
            emit(&failed, OutputFormat::Json),
            Err(CliError::RequestFailed { code: 400 })
        ));

        let ok = NormalizedResult::Success(json!({"relatedHTTPCode": 200}));
        assert!(emit(&ok, OutputFormat::Json).is_ok());
    }
}
