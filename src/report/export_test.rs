/// Tests for JSON export
#[cfg(test)]
mod tests {
    use crate::engine::Scaler;
    use crate::report::{TextRow, format_json};
    use crate::types::{Metrics, Row, Table};

    fn gob_table() -> Table {
        let m = |mean: f64| Metrics {
            unit: "ns/op".to_string(),
            values: vec![],
            rvalues: vec![],
            min: mean * 0.99,
            mean,
            max: mean * 1.01,
        };
        Table {
            metric: "time/op".to_string(),
            configs: vec!["old.txt".to_string(), "new.txt".to_string()],
            rows: vec![Row {
                benchmark: "BenchmarkGobEncode".to_string(),
                group: String::new(),
                metrics: vec![m(13_600_000.0), m(11_800_000.0)],
                delta: "-13.24%".to_string(),
                change: 1,
                note: "(p=0.016 n=4+5)".to_string(),
                scaler: Scaler::new(13_600_000.0, "ns/op"),
            }],
        }
    }

    fn render(tables: &[Table]) -> String {
        let mut buf = Vec::new();
        format_json(&mut buf, tables).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn test_rows_serialize_as_cols_objects() {
        let out = render(&[gob_table()]);
        let parsed: Vec<Vec<TextRow>> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].len(), 2);
        assert_eq!(
            parsed[0][1].cols,
            vec![
                "BenchmarkGobEncode",
                "13600000",
                "ns/op",
                "1%",
                "11800000",
                "ns/op",
                "1%",
                "-13.24%",
                "(p=0.016 n=4+5)"
            ]
        );
    }

    #[test]
    fn test_two_space_indentation() {
        let out = render(&[gob_table()]);
        assert!(out.starts_with("[\n  [\n    {\n      \"Cols\": [\n        \"name\","), "{}", out);
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn test_rows_are_not_padded() {
        let mut table = gob_table();
        table.configs.push("third.txt".to_string());
        table.rows[0].metrics.push(Metrics::default());
        let value: serde_json::Value = serde_json::from_str(&render(&[table])).unwrap();
        let header = value[0][0]["Cols"].as_array().unwrap();
        let data = value[0][1]["Cols"].as_array().unwrap();
        assert_eq!(header.len(), 4);
        assert_eq!(data.len(), 7);
    }
}
