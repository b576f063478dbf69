/// Tests for plain-text rendering
#[cfg(test)]
mod tests {
    use crate::engine::Scaler;
    use crate::report::format_text;
    use crate::types::{Metrics, Row, Table};

    fn single(metric: &str, benchmark: &str, unit: &str, mean: f64, min: f64, max: f64) -> Table {
        Table {
            metric: metric.to_string(),
            configs: vec!["a.txt".to_string()],
            rows: vec![Row {
                benchmark: benchmark.to_string(),
                group: String::new(),
                metrics: vec![Metrics { unit: unit.to_string(), values: vec![], rvalues: vec![], min, mean, max }],
                delta: String::new(),
                change: 0,
                note: String::new(),
                scaler: Scaler::new(mean, unit),
            }],
        }
    }

    fn render(tables: &[Table]) -> String {
        let mut buf = Vec::new();
        format_text(&mut buf, tables).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_single_table_layout() {
        let out = render(&[single("time/op", "BenchmarkX", "ns/op", 10.0, 10.0, 10.0)]);
        assert_eq!(out, "name        value  time/op  diff\nBenchmarkX     10    ns/op    0%\n");
    }

    #[test]
    fn test_tables_share_widths_and_are_separated() {
        let out = render(&[
            single("time/op", "BenchmarkX", "ns/op", 10.0, 10.0, 10.0),
            single("alloc/op", "BenchmarkLonger", "B/op", 2048.0, 2000.0, 2150.0),
        ]);
        let expected = "\
name             value  time/op   diff
BenchmarkX          10     ns/op    0%

name             value  alloc/op  diff
BenchmarkLonger   2048      B/op    5%
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_no_tables_render_nothing() {
        assert_eq!(render(&[]), "");
    }
}
