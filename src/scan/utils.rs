//! Path key helpers shared by the scanner and its tests

use std::ffi::OsStr;

/// Check whether an entry name marks a dot-file.
///
/// Only the first byte is inspected. An empty name is not a dot-file.
pub fn is_dot_name(name: &OsStr) -> bool {
    path_bytes(name).first() == Some(&b'.')
}

/// Raw bytes of a path or name, as used for table keys.
///
/// On unix these are the exact bytes the filesystem returned, valid UTF-8 or not.
pub fn path_bytes(s: &OsStr) -> &[u8] {
    s.as_encoded_bytes()
}

/// Join a directory key and an entry name into a cleaned child key.
///
/// Keys always use `/` as the separator, regardless of platform.
pub fn join_key(parent: &[u8], name: &[u8]) -> Vec<u8> {
    match (parent.is_empty(), name.is_empty()) {
        (true, true) => Vec::new(),
        (true, false) => clean_path(name),
        (false, true) => clean_path(parent),
        (false, false) => {
            let mut joined = Vec::with_capacity(parent.len() + 1 + name.len());
            joined.extend_from_slice(parent);
            joined.push(b'/');
            joined.extend_from_slice(name);
            clean_path(&joined)
        }
    }
}

/// Lexically clean a slash-separated path.
///
/// Repeated separators collapse, `.` segments disappear and `..` removes the
/// preceding segment where there is one. An empty result becomes `.`.
pub fn clean_path(path: &[u8]) -> Vec<u8> {
    if path.is_empty() {
        return b".".to_vec();
    }

    let rooted = path.first() == Some(&b'/');
    let mut segments: Vec<&[u8]> = Vec::new();

    for segment in path.split(|&b| b == b'/') {
        match segment {
            b"" | b"." => {}
            b".." => {
                if segments.last().is_some_and(|last| *last != b"..") {
                    segments.pop();
                } else if !rooted {
                    segments.push(b"..");
                }
            }
            other => segments.push(other),
        }
    }

    let body = segments.join(&b'/');
    if rooted {
        let mut out = Vec::with_capacity(body.len() + 1);
        out.push(b'/');
        out.extend_from_slice(&body);
        out
    } else if body.is_empty() {
        b".".to_vec()
    } else {
        body
    }
}
