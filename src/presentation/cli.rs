use crate::domain::company::CompanyQuery;
use clap::Parser;

/// Flags for the `fetch` command. Realm and company are required, but are
/// checked by [`Cli::company_query`] so a missing flag prints the usual
/// one-line message instead of clap's usage error.
#[derive(Debug, Parser)]
#[command(name = "fetch", version, about = "Fetch company data from the API")]
pub struct Cli {
    #[arg(short = 'r', long, help = "Realm ID (required)")]
    pub realm: Option<String>,

    #[arg(short = 'c', long, help = "Company ID (required)")]
    pub company: Option<String>,

    #[arg(
        short = 'v',
        long,
        default_value_t = false,
        help = "Show company value history as a graph"
    )]
    pub value: bool,
}

impl Cli {
    pub fn company_query(&self) -> Option<CompanyQuery> {
        CompanyQuery::new(self.realm.as_deref(), self.company.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_flags() {
        let cli = Cli::try_parse_from(["fetch", "-r", "0", "--company", "42", "-v"]).unwrap();

        assert_eq!(
            cli.company_query(),
            CompanyQuery::new(Some("0"), Some("42"))
        );
        assert!(cli.value);
    }

    #[test]
    fn test_value_defaults_off() {
        let cli = Cli::try_parse_from(["fetch", "--realm", "1", "-c", "7"]).unwrap();
        assert!(!cli.value);
    }

    #[test]
    fn test_missing_flags_parse_but_give_no_query() {
        let cli = Cli::try_parse_from(["fetch", "-v"]).unwrap();
        assert!(cli.company_query().is_none());

        let cli = Cli::try_parse_from(["fetch", "-r", "0"]).unwrap();
        assert!(cli.company_query().is_none());
    }
}
