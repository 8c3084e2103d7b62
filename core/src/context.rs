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

use crate::time::DateTime;
use crate::{Error, Result};
use bytes::Bytes;
use rand::RngCore;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context carries every impure capability a request builder needs.
///
/// ## Important
///
/// The clock and the random source default to the system ones, since every
/// signed request needs both. The HTTP transport and the environment default
/// to no-op implementations that return errors or empty values when called.
///
/// ## Example
///
/// ```
/// use apisign_core::{Context, OsEnv};
///
/// let ctx = Context::new()
///     .with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
    clock: Arc<dyn Clock>,
    random: Arc<dyn SecureRandom>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("env", &self.env)
            .field("clock", &self.clock)
            .field("random", &self.random)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context.
    ///
    /// Uses [`SystemClock`] and [`OsRandom`], with no-op HTTP and env.
    /// Use the `with_*` methods to configure the components you need.
    ///
    /// ```
    /// use apisign_core::Context;
    ///
    /// let ctx = Context::new();
    /// // ctx.with_http_send(my_http_client)
    /// //    .with_clock(my_clock);
    /// ```
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
            clock: Arc::new(SystemClock),
            random: Arc::new(OsRandom),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the random source implementation.
    pub fn with_random(mut self, random: impl SecureRandom) -> Self {
        self.random = Arc::new(random);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }

    /// Current time from the configured clock.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    /// Fill a fresh buffer of `n` bytes from the configured random source.
    pub fn random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0; n];
        self.random.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// HttpSend is used to send the assembled request.
///
/// This trait is designed especially for the request builder, please don't use
/// it as a general http client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Permits parameterizing the environment lookups.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    fn vars(&self) -> HashMap<String, String>;
}

/// Clock provides the timestamp every signed request carries.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Current time in UTC.
    fn now(&self) -> DateTime;
}

/// SecureRandom provides the per-request salt.
///
/// Implementations must be cryptographically secure.
pub trait SecureRandom: Debug + Send + Sync + 'static {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }
}

/// SystemClock reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        crate::time::now()
    }
}

/// StaticClock always returns the same instant.
///
/// # Note
///
/// Requests must always be signed with the current time.
/// Only use this for testing.
#[derive(Debug, Clone, Copy)]
pub struct StaticClock(pub DateTime);

impl Clock for StaticClock {
    fn now(&self) -> DateTime {
        self.0
    }
}

/// OsRandom reads from the operating system's secure random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::unexpected("read os random source failed").with_source(e))
    }
}

/// StaticRandom repeats a fixed byte pattern.
///
/// Only use this for testing, a fixed salt defeats its purpose.
#[derive(Debug, Clone, Default)]
pub struct StaticRandom(pub Vec<u8>);

impl SecureRandom for StaticRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        if self.0.is_empty() {
            return Err(Error::unexpected("static random source is empty"));
        }
        for (b, v) in dest.iter_mut().zip(self.0.iter().cycle()) {
            *b = *v;
        }
        Ok(())
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None/empty.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}
