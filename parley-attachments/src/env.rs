//! Execution-environment probe for the thumbnail renderer.
//!
//! One legacy engine family ships a broken worker-based decoder below a
//! fixed version; rendering is skipped there rather than failing.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum engine major version with a working worker-based decoder.
pub const MIN_ENGINE_VERSION: u32 = 13;

/// What the renderer needs to know about where it is running.
pub trait EnvironmentProbe: Send + Sync {
    /// Feature-probe result: is this the affected engine family at all?
    fn is_affected_engine(&self) -> bool;

    /// The environment's agent string, for version extraction.
    fn agent_string(&self) -> String;
}

/// Extract the engine major version from an agent string
/// (`Version/<major>`); absent or unparsable versions count as 0.
pub fn engine_major_version(agent: &str) -> u32 {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_RE.get_or_init(|| Regex::new(r"Version/([0-9]+)").expect("static pattern"));
    re.captures(agent)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// True when the probe identifies an affected engine too old to decode.
pub fn is_unsupported(probe: &dyn EnvironmentProbe) -> bool {
    probe.is_affected_engine() && engine_major_version(&probe.agent_string()) < MIN_ENGINE_VERSION
}

/// Probe for environments known to be unaffected (native shells, current
/// engines).
#[derive(Debug, Default)]
pub struct UnaffectedEnvironment;

impl EnvironmentProbe for UnaffectedEnvironment {
    fn is_affected_engine(&self) -> bool {
        false
    }

    fn agent_string(&self) -> String {
        String::new()
    }
}
