/// Tests for configuration resolution
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::*;
    use crate::engine::DeltaTest;
    use crate::error::BenchstatError;
    use std::path::PathBuf;

    fn args() -> CliArgs {
        CliArgs {
            delta_test: "utest".to_string(),
            alpha: 0.05,
            geomean: false,
            split: "pkg,goos,goarch".to_string(),
            units: "b,allocs,ns".to_string(),
            diff: false,
            raw: false,
            output: "text".to_string(),
            files: vec![PathBuf::from("old.txt")],
        }
    }

    #[test]
    fn test_delta_test_names() {
        let registry = Registry::new();
        for name in ["u", "u-test", "utest", "UTest"] {
            assert_eq!(registry.delta_test(name), Some(DeltaTest::UTest), "{}", name);
        }
        for name in ["t", "t-test", "ttest", "TTEST"] {
            assert_eq!(registry.delta_test(name), Some(DeltaTest::TTest), "{}", name);
        }
        assert_eq!(registry.delta_test("None"), Some(DeltaTest::None));
        assert_eq!(registry.delta_test("wilcoxon"), None);
    }

    #[test]
    fn test_output_format_names() {
        let registry = Registry::new();
        assert_eq!(registry.output_format("JSON"), Some(OutputFormat::Json));
        assert_eq!(registry.output_format("html"), Some(OutputFormat::Html));
        assert_eq!(registry.output_format("text"), Some(OutputFormat::Text));
        assert_eq!(registry.output_format("csv"), None);
    }

    #[test]
    fn test_default_units() {
        let units = parse_units("b,allocs,ns", &Registry::new());
        assert_eq!(units, vec!["B/op", "allocs/op", "ns/op"]);
    }

    #[test]
    fn test_unknown_units_are_dropped() {
        let registry = Registry::new();
        let units = parse_units("foo", &registry);
        assert!(units.is_empty());
        assert_ne!(units, parse_units("b,allocs,ns", &registry));
        assert_eq!(parse_units("NS,foo,B", &registry), vec!["ns/op", "B/op"]);
        assert!(parse_units("", &registry).is_empty());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(parse_split("pkg,goos"), vec!["pkg", "goos"]);
        assert!(parse_split("").is_empty());
    }

    #[test]
    fn test_build_report_config() {
        let config = build_report_config(&args(), &Registry::new()).unwrap();
        assert_eq!(config.delta_test, DeltaTest::UTest);
        assert_eq!(config.output, Some(OutputFormat::Text));
        assert_eq!(config.split_by, vec!["pkg", "goos", "goarch"]);

        let engine = config.collection();
        assert_eq!(engine.units, vec!["B/op", "allocs/op", "ns/op"]);
        assert_eq!(engine.alpha, 0.05);
    }

    #[test]
    fn test_unknown_delta_test_is_usage_error() {
        let mut a = args();
        a.delta_test = "ztest".to_string();
        let err = build_report_config(&a, &Registry::new()).unwrap_err();
        assert!(matches!(err, BenchstatError::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_no_files_is_usage_error() {
        let mut a = args();
        a.files.clear();
        let err = build_report_config(&a, &Registry::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_output_format_resolves_to_none() {
        let mut a = args();
        a.output = "xml".to_string();
        let config = build_report_config(&a, &Registry::new()).unwrap();
        assert_eq!(config.output, None);
    }
}
