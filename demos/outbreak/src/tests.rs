//! Command-line and config-loading tests for the outbreak demo.

#[cfg(test)]
mod args {
    use clap::Parser;
    use epi_core::EpidemicConfig;

    use crate::Args;

    #[test]
    fn no_arguments_keeps_defaults() {
        let args = Args::try_parse_from(["outbreak"]).unwrap();
        assert!(args.config.is_none());
        let mut config = EpidemicConfig::default();
        args.apply(&mut config);
        assert_eq!(config, EpidemicConfig::default());
    }

    #[test]
    fn positional_path_and_overrides() {
        let args =
            Args::try_parse_from(["outbreak", "scenario.json", "--seed", "7", "--ticks", "250"])
                .unwrap();
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("scenario.json")));
        let mut config = EpidemicConfig::default();
        args.apply(&mut config);
        assert_eq!(config.seed, 7);
        assert_eq!(config.total_ticks, 250);
    }

    #[test]
    fn help_is_not_a_config_path() {
        let err = Args::try_parse_from(["outbreak", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Args::try_parse_from(["outbreak", "--population", "5"]).is_err());
    }
}

#[cfg(test)]
mod load {
    use std::path::Path;

    use crate::load_config;

    #[test]
    fn missing_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.population, 2000);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let path = std::env::temp_dir().join(format!("outbreak-partial-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "population": 50, "region_count": 4 }"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.population, 50);
        assert_eq!(config.region_count, 4);
        assert_eq!(config.day_length, 100);
    }

    #[test]
    fn unreadable_path_names_the_file() {
        let err = load_config(Some(Path::new("/nonexistent/outbreak.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/outbreak.json"));
    }
}
