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

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use sha2::Digest;
use sha2::Sha256;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode
pub fn base64_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(content)
        .map_err(|e| Error::encoding_failed("base64 decode failed").with_source(e))
}

/// Hex encoded SHA256 hash.
///
/// Use this function instead of `hex::encode(sha256(content))` can reduce
/// extra copy.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_sha256() {
        let cases = vec![
            (
                "SomeData",
                "e2be1ef8ab38221875b44004a5f801ccd771648047d384b059031a6c65ca6a6f",
            ),
            (
                "",
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                "abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
        ];

        for (input, expected) in cases {
            let actual = hex_sha256(input.as_bytes());
            assert_eq!(actual.len(), 64);
            assert_eq!(actual, expected, "Failed on input: {input}");
        }
    }

    #[test]
    fn test_base64_round_trip() {
        let encoded = base64_encode(b"{\"a\":\"1\"}");
        assert_eq!(encoded, "eyJhIjoiMSJ9");
        assert_eq!(base64_decode(&encoded).unwrap(), b"{\"a\":\"1\"}".to_vec());
    }

    #[test]
    fn test_base64_decode_invalid() {
        let err = base64_decode("not base64!").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::EncodingFailed);
    }
}
