use std::sync::Once;

use log::LevelFilter;

/// How the process-wide logger is set up.
///
/// Resolution order for the filter: `filter` if given, else `RUST_LOG`,
/// else `level`. `modules` overrides are applied on top of whichever was
/// chosen, so `("tessel_ui", Trace)` can expose frame-level detail without
/// flooding the rest.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"warn,tessel_ui=debug"`.
    pub filter: Option<String>,
    pub level: LevelFilter,
    pub modules: Vec<(String, LevelFilter)>,
    /// Prefix records with a timestamp. Off suits scripted, frame-stepped runs.
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            level: LevelFilter::Info,
            modules: Vec::new(),
            timestamps: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Overrides `RUST_LOG` with an explicit filter string.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), ..Self::default() }
    }

    pub fn module(mut self, module: impl Into<String>, level: LevelFilter) -> Self {
        self.modules.push((module.into(), level));
        self
    }

    /// The filter string this config resolves to, `None` meaning "use `level`".
    fn resolved_filter(&self) -> Option<String> {
        self.filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.resolved_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(self.level);
            }
        }
        for (module, level) in &self.modules {
            builder.filter_module(module, *level);
        }
        if !self.timestamps {
            builder.format_timestamp(None);
        }
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call; later calls do nothing.
/// Call early in `main`, before the first frame.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // A logger installed by the host is left in place.
        if config.builder().try_init().is_ok() {
            log::debug!("logging initialized at {:?}", log::max_level());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig::with_filter("warn");
        assert_eq!(config.resolved_filter().as_deref(), Some("warn"));
    }

    #[test]
    fn module_overrides_accumulate() {
        let config = LoggingConfig::default()
            .module("tessel_ui", LevelFilter::Trace)
            .module("tessel_engine", LevelFilter::Warn);
        assert_eq!(config.modules.len(), 2);
        assert_eq!(config.modules[0], ("tessel_ui".to_owned(), LevelFilter::Trace));
    }
}
