#[derive(Default)]
pub struct Config {
    /// Hides the banner printed before the greeting cycle.
    pub no_banner: bool,
    /// Never wait for a key press after showing a message.
    ///
    /// Messages are still shown, the cycle just does not block on them.
    pub no_wait: bool,
    /// 0 prints everything, 1 drops the banner and headers,
    /// 2 additionally drops diagnostics below warnings.
    pub quiet: u8,
    pub verbose: u8,
}

impl Config {
    /// Default `tracing` directive for the current verbosity, used when
    /// `GREETER_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (q, _) if q >= 2 => "warn",
            (_, 0) => "info",
            (_, 1) => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directive_follows_flags() {
        let mut cfg = Config::default();
        assert_eq!(cfg.log_directive(), "info");

        cfg.verbose = 1;
        assert_eq!(cfg.log_directive(), "debug");

        cfg.verbose = 3;
        assert_eq!(cfg.log_directive(), "trace");

        // quiet wins over verbose
        cfg.quiet = 2;
        assert_eq!(cfg.log_directive(), "warn");
    }
}
