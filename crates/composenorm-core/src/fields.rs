//! Per-field normalizers.
//!
//! Compose accepts several spellings for most fields: a bare scalar, a list
//! of scalars, a list of long-form mappings, or a mapping keyed by name.
//! Each function here erases that variance and returns the canonical type.
//! None of them fail; entries of an unusable shape are dropped.

use crate::raw::RawValue;

/// `image`: string or null.
pub fn image(raw: &RawValue) -> Option<String> {
    raw.as_string_or_null()
}

/// `build`: a context string or null.
///
/// The long form collapses to its `context` key.
pub fn build(raw: &RawValue) -> Option<String> {
    match raw {
        RawValue::Mapping(_) => raw.get("context").as_string_or_null(),
        other => other.as_string_or_null(),
    }
}

/// `ports`: short-form port tokens.
///
/// Long-form entries render as `published:target[/protocol]`, or just
/// `target[/protocol]` when nothing is published. This extends the plain
/// `published:target` token: a `host_ip` next to `published` is kept as the
/// leading segment (`127.0.0.1:8080:80`, `[::1]:8443:443`), matching the
/// compose short syntax, so the bind address is not silently lost.
pub fn ports(raw: &RawValue) -> Vec<String> {
    raw.as_list()
        .iter()
        .filter_map(|entry| match entry {
            RawValue::Mapping(_) => long_form_port(entry),
            other => scalar_entry(other, "ports"),
        })
        .collect()
}

fn long_form_port(entry: &RawValue) -> Option<String> {
    let Some(target) = non_empty(entry.get("target")) else {
        tracing::debug!("dropping long-form port without target");
        return None;
    };

    let mut token = match non_empty(entry.get("published")) {
        Some(published) => match non_empty(entry.get("host_ip")) {
            Some(ip) if ip.contains(':') => format!("[{ip}]:{published}:{target}"),
            Some(ip) => format!("{ip}:{published}:{target}"),
            None => format!("{published}:{target}"),
        },
        None => target,
    };

    if let Some(protocol) = non_empty(entry.get("protocol")) {
        token.push('/');
        token.push_str(&protocol);
    }
    Some(token)
}

/// `expose`: container-side ports only.
pub fn expose(raw: &RawValue) -> Vec<String> {
    stringified(raw, "expose")
}

/// `networks`: names of attached networks, in declaration order.
pub fn networks(raw: &RawValue) -> Vec<String> {
    names(raw, "networks")
}

/// `network_mode`: string or null.
pub fn network_mode(raw: &RawValue) -> Option<String> {
    raw.as_string_or_null()
}

/// `depends_on`: names of services this one depends on.
pub fn depends_on(raw: &RawValue) -> Vec<String> {
    names(raw, "depends_on")
}

/// `links`: link tokens as written.
pub fn links(raw: &RawValue) -> Vec<String> {
    stringified(raw, "links")
}

/// `volumes`: short-form mount tokens.
///
/// Long-form entries render as `source:target[:ro]`, or `target` for
/// anonymous volumes.
pub fn volumes(raw: &RawValue) -> Vec<String> {
    raw.as_list()
        .iter()
        .filter_map(|entry| match entry {
            RawValue::Mapping(_) => long_form_volume(entry),
            other => scalar_entry(other, "volumes"),
        })
        .collect()
}

fn long_form_volume(entry: &RawValue) -> Option<String> {
    let Some(target) = non_empty(entry.get("target")) else {
        tracing::debug!("dropping long-form volume without target");
        return None;
    };

    let mut token = match non_empty(entry.get("source")) {
        Some(source) => format!("{source}:{target}"),
        None => target,
    };
    if matches!(entry.get("read_only"), RawValue::Bool(true)) {
        token.push_str(":ro");
    }
    Some(token)
}

/// Mapping form yields its keys; list or scalar form yields its elements.
fn names(raw: &RawValue, field: &'static str) -> Vec<String> {
    match raw {
        RawValue::Mapping(map) => map.keys().cloned().collect(),
        other => stringified(other, field),
    }
}

fn stringified(raw: &RawValue, field: &'static str) -> Vec<String> {
    raw.as_list()
        .iter()
        .filter_map(|entry| scalar_entry(entry, field))
        .collect()
}

fn scalar_entry(entry: &RawValue, field: &'static str) -> Option<String> {
    let value = entry.as_string_or_null();
    if value.is_none() {
        tracing::debug!(field, kind = entry.kind(), "dropping non-scalar entry");
    }
    value
}

fn non_empty(value: &RawValue) -> Option<String> {
    value.as_string_or_null().filter(|s| !s.is_empty())
}
