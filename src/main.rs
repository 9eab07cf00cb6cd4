mod app;
mod data;
mod error;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use app::MeteorApp;
use data::filter::FilterField;

/// Filter meteorite landings by mass or year and export the matches to Excel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Tab-delimited dataset to load. Prompted for when omitted.
    path: Option<PathBuf>,

    /// Field to filter on (`mass` or `year`). Skips the filter menu.
    #[arg(long)]
    field: Option<FilterField>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut app = MeteorApp::new(io::stdin().lock(), io::stdout().lock());
    app.run(cli.path, cli.field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_option_parses_by_name() {
        let cli = Cli::try_parse_from(["meteor-filter", "data.txt", "--field", "Year"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("data.txt")));
        assert_eq!(cli.field, Some(FilterField::Year));

        let cli = Cli::try_parse_from(["meteor-filter"]).unwrap();
        assert!(cli.path.is_none());
        assert!(cli.field.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Cli::try_parse_from(["meteor-filter", "--field", "fall"]).unwrap_err();
        assert!(err.to_string().contains("unknown filter field 'fall'"));
    }
}
