use clap::Parser;
use std::path::PathBuf;

/// Simulate a small bookstore checkout
#[derive(Parser, Debug)]
#[command(name = "bookstore-checkout")]
#[command(about = "Run a bookstore checkout against a catalog file", long_about = None)]
pub struct CliArgs {
    /// Path to the catalog file
    #[arg(
        long = "catalog",
        value_name = "PATH",
        default_value = "database.txt",
        help = "Path to the book catalog file"
    )]
    pub catalog: PathBuf,

    /// Trace the cart-transfer algorithm
    #[arg(
        long = "trace",
        help = "Print cart contents to stderr after each primitive move of the transfer"
    )]
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::defaults(&["program"], "database.txt", false)]
    #[case::custom_catalog(&["program", "--catalog", "books.txt"], "books.txt", false)]
    #[case::trace_enabled(&["program", "--trace"], "database.txt", true)]
    #[case::all_options(
        &["program", "--catalog", "books.txt", "--trace"],
        "books.txt",
        true
    )]
    fn test_argument_parsing(
        #[case] args: &[&str],
        #[case] expected_catalog: &str,
        #[case] expected_trace: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        assert_eq!(parsed.catalog, Path::new(expected_catalog));
        assert_eq!(parsed.trace, expected_trace);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = CliArgs::try_parse_from(["program", "--strategy", "sync"]);
        assert!(result.is_err());
    }
}
