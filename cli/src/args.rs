use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "es-monitor-bootstrap",
    version,
    about = "Creates the SNS topics and IAM role used by Elasticsearch Service monitors"
)]
pub struct Args {
    /// Named AWS credential profile used for every call
    pub profile: String,
}

#[cfg(test)]
mod test {
    use super::Args;
    use clap::Parser;

    #[test]
    fn should_take_profile_as_single_positional_argument() {
        let args = Args::try_parse_from(["es-monitor-bootstrap", "security-tooling"]).unwrap();

        assert_eq!("security-tooling", args.profile);
    }

    #[test]
    fn should_require_profile() {
        assert!(Args::try_parse_from(["es-monitor-bootstrap"]).is_err());
    }

    #[test]
    fn should_reject_extra_arguments() {
        assert!(Args::try_parse_from(["es-monitor-bootstrap", "default", "other"]).is_err());
    }
}
