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

//! Time related utils.

use crate::Error;
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// HTTP date format: "Sat, 12 Feb 2022 07:52:00 GMT"
///
/// The zone is always the literal `GMT`, never a numeric offset.
pub const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Sat, 12 Feb 2022 07:52:00 GMT`
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Parse http date like `Sat, 12 Feb 2022 07:52:00 GMT`.
pub fn parse_http_date(s: &str) -> crate::Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, HTTP_DATE).map_err(|e| {
        Error::encoding_failed(format!("parse {s} into http date failed")).with_source(e)
    })?;
    Ok(t.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn test_time() -> DateTime {
        Utc.with_ymd_and_hms(2022, 2, 12, 7, 52, 0).unwrap()
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(test_time()), "Sat, 12 Feb 2022 07:52:00 GMT");
    }

    #[test]
    fn test_format_http_date_pads_day() {
        let t = Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 9).unwrap();
        assert_eq!(format_http_date(t), "Tue, 01 Mar 2022 00:00:09 GMT");
    }

    #[test]
    fn test_parse_http_date() {
        let t = parse_http_date("Sat, 12 Feb 2022 07:52:00 GMT").unwrap();
        assert_eq!(t, test_time());
    }

    #[test]
    fn test_parse_http_date_invalid() {
        assert!(parse_http_date("2022-02-12T07:52:00Z").is_err());
    }
}
