//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Scrape Google Images results and batch download them.
///
/// Searches for a query, walks the result pages, and downloads images until
/// the requested count is reached. Query and limit can be passed as arguments
/// or entered interactively when omitted.
#[derive(Parser, Debug)]
#[command(name = "imgrab")]
#[command(author, version, about)]
pub struct Args {
    /// Search query (prompted for interactively when omitted)
    pub query: Option<String>,

    /// Number of images to download (prompted for interactively when omitted)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Directory to save images into
    #[arg(short, long, default_value = "./output")]
    pub output_dir: PathBuf,

    /// Delay between image downloads in milliseconds (max 60000)
    #[arg(short, long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub delay: u64,

    /// Keep images downloaded before a page fetch failure instead of discarding them
    #[arg(long)]
    pub keep_partial: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["imgrab"]).unwrap();
        assert!(args.query.is_none());
        assert!(args.limit.is_none());
        assert_eq!(args.output_dir, PathBuf::from("./output"));
        assert_eq!(args.delay, 1000);
        assert!(!args.keep_partial);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_positional_query() {
        let args = Args::try_parse_from(["imgrab", "tabby cats"]).unwrap();
        assert_eq!(args.query.as_deref(), Some("tabby cats"));
    }

    #[test]
    fn test_cli_limit_short_flag() {
        let args = Args::try_parse_from(["imgrab", "cats", "-n", "5"]).unwrap();
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_cli_limit_long_flag() {
        let args = Args::try_parse_from(["imgrab", "cats", "--limit", "25"]).unwrap();
        assert_eq!(args.limit, Some(25));
    }

    #[test]
    fn test_cli_limit_non_numeric_rejected() {
        let result = Args::try_parse_from(["imgrab", "cats", "-n", "many"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_output_dir_flag() {
        let args = Args::try_parse_from(["imgrab", "cats", "-o", "/tmp/pics"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("/tmp/pics"));
    }

    #[test]
    fn test_cli_delay_flag() {
        let args = Args::try_parse_from(["imgrab", "cats", "-d", "250"]).unwrap();
        assert_eq!(args.delay, 250);
    }

    #[test]
    fn test_cli_delay_zero_allowed() {
        let args = Args::try_parse_from(["imgrab", "cats", "-d", "0"]).unwrap();
        assert_eq!(args.delay, 0);
    }

    #[test]
    fn test_cli_delay_over_max_rejected() {
        let result = Args::try_parse_from(["imgrab", "cats", "-d", "60001"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_keep_partial_flag() {
        let args = Args::try_parse_from(["imgrab", "cats", "--keep-partial"]).unwrap();
        assert!(args.keep_partial);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["imgrab", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["imgrab", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["imgrab", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["imgrab", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["imgrab", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_combined_all_flags() {
        let args = Args::try_parse_from([
            "imgrab",
            "big cats",
            "-n",
            "7",
            "-o",
            "./pics",
            "-d",
            "500",
            "--keep-partial",
        ])
        .unwrap();
        assert_eq!(args.query.as_deref(), Some("big cats"));
        assert_eq!(args.limit, Some(7));
        assert_eq!(args.output_dir, PathBuf::from("./pics"));
        assert_eq!(args.delay, 500);
        assert!(args.keep_partial);
    }
}
