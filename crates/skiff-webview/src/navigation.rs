//! Navigation Classification
//!
//! Decides how an arbitrary input string should be dispatched: direct
//! load, script execution, DNS-qualified load, or search fallback.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::request::LoadRequest;

const SCRIPT_SCHEME: &str = "javascript";

/// Search endpoint used when input cannot be resolved into an address.
/// Placeholder policy; provider selection lives outside this crate.
const SEARCH_ENDPOINT: &str = "https://duckduckgo.com/";

/// Classification outcome for a candidate navigation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Hand the decoded source to the engine's script primitive
    Script(String),
    /// Structurally valid address; load as-is with the request's operation
    Load(Url),
    /// Bare hostname; confirm via DNS before loading the qualified address
    ResolveHost { host: String, url: Url },
    /// Query against the search endpoint
    Search(Url),
}

/// A structurally valid address has a scheme and at least one of
/// host, path, or query.
pub fn is_url_valid(url: &Url) -> bool {
    !url.scheme().is_empty() && (url.has_host() || !url.path().is_empty() || url.query().is_some())
}

/// Build a search query URL for literal text
pub fn search_url(text: &str) -> Url {
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("search endpoint is a valid URL");
    url.query_pairs_mut().append_pair("q", text);
    url
}

/// Classify a load request into exactly one disposition.
///
/// Empty input yields `None`: a silent no-op, not an error. The
/// `ResolveHost` disposition is provisional; the caller must confirm the
/// hostname resolves before treating the qualified address as valid, and
/// fall back to `search_url` on resolution failure.
pub fn classify(request: &LoadRequest) -> Option<Disposition> {
    let raw = request.target().trim();

    if raw.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(raw) {
        if url.scheme() == SCRIPT_SCHEME {
            let source = &raw[SCRIPT_SCHEME.len() + 1..];
            let decoded = if source.contains('%') {
                percent_decode_str(source).decode_utf8_lossy().into_owned()
            } else {
                source.to_owned()
            };
            return Some(Disposition::Script(decoded));
        }

        if is_url_valid(&url) {
            return Some(Disposition::Load(url));
        }

        log::debug!("input parsed but not loadable, searching: {raw}");
        return Some(Disposition::Search(search_url(raw)));
    }

    // No scheme. A single word without spaces or dots may be a local
    // hostname; qualify it and let the resolver decide.
    if !raw.contains(' ') && !raw.contains('.') {
        if let Ok(url) = Url::parse(&format!("http://{raw}")) {
            if let Some(host) = url.host_str() {
                return Some(Disposition::ResolveHost {
                    host: host.to_owned(),
                    url: url.clone(),
                });
            }
        }
    }

    Some(Disposition::Search(search_url(raw)))
}
