// beanstalkd text protocol: commands, status lines, YAML bodies
//
// Only the commands the check needs are covered:
//   list-tubes          -> OK <bytes>\r\n<yaml list>\r\n
//   stats-tube <tube>   -> OK <bytes>\r\n<yaml dict>\r\n | NOT_FOUND\r\n
//   quit                -> connection closed

use std::collections::HashMap;

use beanschk_core::domain::{TubeName, TubeStats};

use crate::error::{BeanstalkError, Result};

pub const CRLF: &str = "\r\n";

pub const LIST_TUBES: &str = "list-tubes\r\n";

pub const QUIT: &str = "quit\r\n";

/// Largest reply body accepted (16 MiB); stats and tube lists are far smaller
pub const MAX_BODY_LEN: usize = 16 * 1024 * 1024;

pub fn stats_tube(tube: &str) -> String {
    format!("stats-tube {}{}", tube, CRLF)
}

/// Parse the status line of a data-carrying reply
///
/// # Returns
/// Body length in bytes (without the trailing CRLF) for `OK <bytes>`,
/// at most [`MAX_BODY_LEN`]
pub fn parse_ok_header(line: &str) -> Result<usize> {
    let line = line.trim_end_matches(['\r', '\n']);

    match line.split_once(' ') {
        Some(("OK", len)) => match len.parse::<usize>() {
            Ok(len) if len <= MAX_BODY_LEN => Ok(len),
            _ => Err(BeanstalkError::MalformedReply(line.to_string())),
        },
        _ if line == "NOT_FOUND" => Err(BeanstalkError::NotFound),
        _ => Err(BeanstalkError::Protocol(line.to_string())),
    }
}

/// Decode the body of a `list-tubes` reply
pub fn decode_tube_list(body: &[u8]) -> Result<Vec<TubeName>> {
    let tubes: Option<Vec<TubeName>> = serde_yaml::from_slice(body)?;
    Ok(tubes.unwrap_or_default())
}

/// Decode the body of a `stats-tube` reply; every scalar is kept as its raw text
pub fn decode_tube_stats(body: &[u8]) -> Result<TubeStats> {
    let stats: Option<HashMap<String, String>> = serde_yaml::from_slice(body)?;
    Ok(stats.unwrap_or_default())
}
