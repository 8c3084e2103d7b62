// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Query parameters every API-X request carries. Case sensitive.
pub const API_KEY: &str = "api_key";
pub const APP_SESSION_ID: &str = "app_session_id";

// Headers used by API-X.
pub const SALT: &str = "salt";
pub const APPLICATION_JSON: &str = "application/json";

/// Number of random bytes mixed into a salted signature.
pub const SALT_LENGTH: usize = 256;

// Env values used by API-X.
pub const API_X_API_KEY: &str = "API_X_API_KEY";
pub const API_X_APP_KEY: &str = "API_X_APP_KEY";
pub const API_X_SCHEME: &str = "API_X_SCHEME";
pub const API_X_HOST: &str = "API_X_HOST";
pub const API_X_PORT: &str = "API_X_PORT";
pub const API_X_SALT: &str = "API_X_SALT";
pub const API_X_STRICT_BODY: &str = "API_X_STRICT_BODY";
