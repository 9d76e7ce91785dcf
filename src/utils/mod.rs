use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "bill_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() -> bool {
    init_tracing_with(None)
}

/// Like [`init_tracing`], layering `extra` directives over `RUST_LOG`.
///
/// Only the first call in the process takes effect; returns whether this call
/// performed the initialization.
pub fn init_tracing_with(extra: Option<&str>) -> bool {
    let mut initialized = false;
    TRACING_INIT.call_once(|| {
        initialized = true;
        let (directives, rejected) = parse_directives(extra);
        let filter = directives
            .into_iter()
            .fold(EnvFilter::from_default_env(), |filter, directive| {
                filter.add_directive(directive)
            });

        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();
        for (directive, err) in rejected {
            tracing::warn!(%directive, %err, "ignoring log directive");
        }
    });
    initialized
}

/// Splits the default and `extra` directives into parsed ones and `(raw, error)` rejects.
fn parse_directives(extra: Option<&str>) -> (Vec<Directive>, Vec<(String, String)>) {
    let mut parsed = Vec::new();
    let mut rejected = Vec::new();
    for directive in std::iter::once(DEFAULT_DIRECTIVE)
        .chain(extra.into_iter().flat_map(|raw| raw.split(',')))
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
    {
        match directive.parse::<Directive>() {
            Ok(value) => parsed.push(value),
            Err(err) => rejected.push((directive.to_string(), err.to_string())),
        }
    }
    (parsed, rejected)
}
