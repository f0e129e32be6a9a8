use crate::cli::{OutputFormat, OutputOptions};
use crate::display::Context;

/// How lookup results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Prints the shell banner when set. Lookup misses are answers and
    /// are reported regardless.
    pub chatty: bool,
}

pub fn build_output_config(opts: &OutputOptions, ctx: Context) -> OutputConfig {
    OutputConfig {
        format: opts.format,
        chatty: ctx.interactive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_context_is_not_chatty() {
        let opts = OutputOptions {
            format: OutputFormat::Json,
            quiet: true,
        };
        let ctx = Context { interactive: true }.with_quiet(opts.quiet);
        let config = build_output_config(&opts, ctx);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.chatty);
    }

    #[test]
    fn interactive_context_is_chatty() {
        let opts = OutputOptions {
            format: OutputFormat::Text,
            quiet: false,
        };
        let config = build_output_config(&opts, Context { interactive: true });
        assert!(config.chatty);
    }
}
