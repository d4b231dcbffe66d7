//! Asset version markers for cache busting.
//!
//! Rewrites `?v=<token>` query markers on the asset references of an HTML
//! entry page. The token is the current time in milliseconds, so every run
//! produces a larger value and browsers re-fetch the referenced files.
//!
//! # Rewritten references
//!
//! | Rule             | Matches                                                  |
//! |------------------|----------------------------------------------------------|
//! | `stylesheet`     | `<link ... href="assets/styles/styles.css" ...>`         |
//! | `local-scripts`  | `isLocalhost ? 'dev.js' : 'prod.js'` (both sources)      |
//! | `main-script`    | `<script ... src="app.js" ...>`                          |
//! | `service-worker` | `serviceWorker.register('service-worker.js'`             |
//! | `version-check`  | `|| 'app.js'` fallback in the version-check snippet      |
//!
//! Asset names come from `[version]` in the config. A rule that matches
//! nothing is skipped.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::config::VersionConfig;
use crate::{debug, log};

/// Any existing marker.
static EXISTING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?v=\d+").expect("valid marker regex"));

/// Version token: milliseconds since the UNIX epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn version_token() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Outcome of a rewrite: the token used and how often each rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub version: u64,
    pub applied: Vec<(&'static str, usize)>,
}

impl RewriteReport {
    /// Number of matches for a rule, `0` when it did not apply.
    pub fn count(&self, rule: &str) -> usize {
        self.applied
            .iter()
            .find(|(name, _)| *name == rule)
            .map_or(0, |(_, n)| *n)
    }
}

/// One class of asset reference.
///
/// The pattern's capture groups must cover the whole match; the marker is
/// appended after every group listed in `versioned`.
struct ReferenceRule {
    name: &'static str,
    pattern: Regex,
    versioned: &'static [usize],
}

impl ReferenceRule {
    fn new(name: &'static str, pattern: &str, versioned: &'static [usize]) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid pattern for `{name}` references"))?;
        Ok(Self {
            name,
            pattern,
            versioned,
        })
    }

    fn apply<'h>(&self, html: &'h str, marker: &str) -> (Cow<'h, str>, usize) {
        let mut count = 0;
        let rewritten = self.pattern.replace_all(html, |caps: &Captures<'_>| {
            count += 1;
            let mut out = String::with_capacity(caps[0].len() + marker.len() * 2);
            for i in 1..caps.len() {
                out.push_str(caps.get(i).map_or("", |m| m.as_str()));
                if self.versioned.contains(&i) {
                    out.push_str(marker);
                }
            }
            out
        });
        (rewritten, count)
    }
}

/// Build the reference rules for the configured asset names.
fn reference_rules(config: &VersionConfig) -> Result<Vec<ReferenceRule>> {
    let stylesheet = regex::escape(&config.stylesheet);
    let main_script = regex::escape(&config.main_script);
    let service_worker = regex::escape(&config.service_worker);

    Ok(vec![
        ReferenceRule::new(
            "stylesheet",
            &format!(r#"(<link[^>]*href=["'])({stylesheet})(["'][^>]*>)"#),
            &[2],
        )?,
        ReferenceRule::new(
            "local-scripts",
            r#"((?:isLocalhost|===?\s*["']localhost["'])\s*\?\s*["'])([^"'?]+\.js)(["']\s*:\s*["'])([^"'?]+\.js)(["'])"#,
            &[2, 4],
        )?,
        ReferenceRule::new(
            "main-script",
            &format!(r#"(<script[^>]*src=["'])({main_script})(["'][^>]*>)"#),
            &[2],
        )?,
        ReferenceRule::new(
            "service-worker",
            &format!(r#"(serviceWorker\.register\(\s*["'])({service_worker})(["'])"#),
            &[2],
        )?,
        ReferenceRule::new(
            "version-check",
            &format!(r#"(\|\|\s*["'])({main_script})(["'])"#),
            &[2],
        )?,
    ])
}

/// Strip existing markers and attach `?v=<version>` to every known reference.
pub fn rewrite(
    html: &str,
    version: u64,
    config: &VersionConfig,
) -> Result<(String, RewriteReport)> {
    let marker = format!("?v={version}");
    let mut html = EXISTING_MARKER.replace_all(html, "").into_owned();
    let mut applied = Vec::new();

    for rule in reference_rules(config)? {
        let (rewritten, count) = rule.apply(&html, &marker);
        if count == 0 {
            debug!("version"; "no `{}` reference found", rule.name);
            continue;
        }
        html = rewritten.into_owned();
        applied.push((rule.name, count));
    }

    Ok((html, RewriteReport { version, applied }))
}

/// Rewrite the HTML file at `path` in place.
///
/// A missing file is reported and yields `Ok(None)` without touching anything.
pub fn update_file(
    path: &Path,
    version: u64,
    config: &VersionConfig,
) -> Result<Option<RewriteReport>> {
    if !path.is_file() {
        log!("error"; "{} not found", path.display());
        return Ok(None);
    }

    let html =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (html, report) = rewrite(&html, version, config)?;
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Some(report))
}
