/// Tests for the benchmark result parser
#[cfg(test)]
mod tests {
    use crate::engine::parse::*;

    const SAMPLE: &str = "\
goos: linux
goarch: amd64
pkg: example.com/enc
BenchmarkGobEncode   \t100\t  13552735 ns/op\t  56.63 MB/s
BenchmarkJSONEncode  \t 50\t  32395067 ns/op\t  59.90 MB/s
PASS
ok  \texample.com/enc\t12.3s
";

    #[test]
    fn test_parses_result_lines() {
        let results = parse_results(SAMPLE);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "BenchmarkGobEncode");
        assert_eq!(results[0].iterations, 100);
        assert_eq!(
            results[0].measurements,
            vec![(13552735.0, "ns/op".to_string()), (56.63, "MB/s".to_string())]
        );
    }

    #[test]
    fn test_labels_attach_to_following_results() {
        let results = parse_results(SAMPLE);
        let split: Vec<String> = ["pkg", "goos", "goarch"].iter().map(|s| s.to_string()).collect();
        assert_eq!(results[1].group(&split), "pkg:example.com/enc goos:linux goarch:amd64");
    }

    #[test]
    fn test_label_overrides_previous_value() {
        let data = "pkg: a\nBenchmarkX 1 10 ns/op\npkg: b\nBenchmarkX 1 20 ns/op\n";
        let results = parse_results(data);
        let split = vec!["pkg".to_string()];
        assert_eq!(results[0].group(&split), "pkg:a");
        assert_eq!(results[1].group(&split), "pkg:b");
    }

    #[test]
    fn test_group_skips_missing_keys() {
        let data = "goos: darwin\nBenchmarkX 1 10 ns/op\n";
        let results = parse_results(data);
        let split: Vec<String> = vec!["pkg".to_string(), "goos".to_string()];
        assert_eq!(results[0].group(&split), "goos:darwin");
        assert_eq!(results[0].group(&[]), "");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let data = "\
BenchmarkShort 100
BenchmarkBadIters abc 10 ns/op
Benchmarking is fun: yes it is
BenchmarkOk 10 5 ns/op
";
        let results = parse_results(data);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "BenchmarkOk");
    }

    #[test]
    fn test_non_label_colon_lines_are_ignored() {
        let data = "Note: not a label\nhttp://example.com\nBenchmarkA 1 2 ns/op\n";
        let results = parse_results(data);
        assert_eq!(results.len(), 1);
        assert!(results[0].labels.is_empty());
    }
}
