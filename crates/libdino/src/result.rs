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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record synthesized from a non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpFailure {
    #[serde(rename = "relatedHTTPCode")]
    pub related_http_code: u16,
    #[serde(rename = "requestURL")]
    pub request_url: String,
    /// Raw response body text.
    #[serde(rename = "exceptionErrorMessage")]
    pub exception_error_message: String,
}

/// What a request hands back to its caller: either the decoded response body
/// or the failure record. Serializes to the bare body or to the failure
/// object, so consumers of the JSON form branch on `relatedHTTPCode`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedResult {
    Success(Value),
    HttpFailure(HttpFailure),
}

impl NormalizedResult {
    pub fn is_http_failure(&self) -> bool {
        matches!(self, NormalizedResult::HttpFailure(_))
    }

    pub fn http_failure(&self) -> Option<&HttpFailure> {
        match self {
            NormalizedResult::HttpFailure(f) => Some(f),
            NormalizedResult::Success(_) => None,
        }
    }

    /// The status of a failed response, or the `relatedHTTPCode` the view
    /// service embeds in its own response payloads.
    pub fn related_http_code(&self) -> Option<u64> {
        match self {
            NormalizedResult::HttpFailure(f) => Some(u64::from(f.related_http_code)),
            NormalizedResult::Success(body) => body.get("relatedHTTPCode").and_then(Value::as_u64),
        }
    }

    /// True for transport failures and for 2xx payloads reporting a non-200
    /// `relatedHTTPCode`.
    pub fn is_error(&self) -> bool {
        self.related_http_code().is_some_and(|code| code != 200)
    }

    pub fn into_json(self) -> Value {
        match self {
            NormalizedResult::Success(body) => body,
            NormalizedResult::HttpFailure(f) => serde_json::json!({
                "relatedHTTPCode": f.related_http_code,
                "requestURL": f.request_url,
                "exceptionErrorMessage": f.exception_error_message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn not_found() -> NormalizedResult {
        NormalizedResult::HttpFailure(HttpFailure {
            related_http_code: 404,
            request_url: "http://localhost/foo".to_string(),
            exception_error_message: "not found".to_string(),
        })
    }

    #[test]
    fn success_serializes_to_the_body_verbatim() {
        let result = NormalizedResult::Success(json!({"x": 1}));
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"x": 1}));
        assert_eq!(result.into_json(), json!({"x": 1}));
    }

    #[test]
    fn failure_serializes_to_the_synthesized_object() {
        let expected = json!({
            "relatedHTTPCode": 404,
            "requestURL": "http://localhost/foo",
            "exceptionErrorMessage": "not found",
        });
        assert_eq!(serde_json::to_value(not_found()).unwrap(), expected);
        assert_eq!(not_found().into_json(), expected);
    }

    #[test]
    fn related_http_code_covers_both_shapes() {
        assert_eq!(not_found().related_http_code(), Some(404));
        assert!(not_found().is_error());

        let ok = NormalizedResult::Success(json!({"relatedHTTPCode": 200, "platforms": []}));
        assert_eq!(ok.related_http_code(), Some(200));
        assert!(!ok.is_error());

        let embedded = NormalizedResult::Success(json!({
            "relatedHTTPCode": 400,
            "exceptionErrorMessage": "OMVS-DINO-400-001 bad platform",
        }));
        assert!(embedded.is_error());
        assert!(!embedded.is_http_failure());

        let bare = NormalizedResult::Success(json!([1, 2, 3]));
        assert_eq!(bare.related_http_code(), None);
        assert!(!bare.is_error());
    }
}
