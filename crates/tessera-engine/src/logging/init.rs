use std::sync::Once;

/// Directive that enables the per-frame [`RenderStats`] summaries logged by
/// [`Target::render`].
///
/// [`RenderStats`]: crate::render::RenderStats
/// [`Target::render`]: crate::render::Target::render
pub const FRAME_STATS_DIRECTIVE: &str = "tessera_engine::render=trace";

const DEFAULT_FILTER: &str = "info";

/// Logger configuration for a rasterizer host.
///
/// `env_filter` uses `env_logger` filter syntax ("warn",
/// "tessera_engine::surface=debug"). When unset, `RUST_LOG` applies, then
/// `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Adds [`FRAME_STATS_DIRECTIVE`] on top of whichever filter applies.
    pub frame_stats: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            frame_stats: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    pub fn with_frame_stats(mut self, on: bool) -> Self {
        self.frame_stats = on;
        self
    }

    /// The filter string `init_logging` installs, given the value of
    /// `RUST_LOG`.
    pub fn effective_filter(&self, rust_log: Option<&str>) -> String {
        let base = self
            .env_filter
            .as_deref()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER);
        if self.frame_stats {
            format!("{base},{FRAME_STATS_DIRECTIVE}")
        } else {
            base.to_owned()
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.effective_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let config = LoggingConfig::default().with_env_filter("warn");
        assert_eq!(config.effective_filter(Some("debug")), "warn");
    }

    #[test]
    fn rust_log_then_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.effective_filter(Some("tessera_engine=debug")), "tessera_engine=debug");
        assert_eq!(config.effective_filter(None), "info");
        assert_eq!(config.effective_filter(Some("  ")), "info");
    }

    #[test]
    fn frame_stats_adds_render_trace() {
        let config = LoggingConfig::default().with_frame_stats(true);
        assert_eq!(config.effective_filter(None), "info,tessera_engine::render=trace");

        let config = config.with_env_filter("error");
        assert_eq!(config.effective_filter(Some("debug")), "error,tessera_engine::render=trace");
    }

    #[test]
    fn write_style_builder() {
        let config = LoggingConfig::default().with_write_style(env_logger::WriteStyle::Never);
        assert!(matches!(config.write_style, env_logger::WriteStyle::Never));
        assert!(!config.frame_stats);
    }
}
