/// Tests for HTML rendering
#[cfg(test)]
mod tests {
    use crate::engine::Scaler;
    use crate::report::{HTML_STYLE, escape_html, format_html};
    use crate::types::{Metrics, Row, Table};

    fn row(group: &str, benchmark: &str, configs: usize, change: i32) -> Row {
        let m = Metrics {
            unit: "ns/op".to_string(),
            values: vec![],
            rvalues: vec![],
            min: 13_500_000.0,
            mean: 13_600_000.0,
            max: 13_700_000.0,
        };
        Row {
            benchmark: benchmark.to_string(),
            group: group.to_string(),
            metrics: vec![m; configs],
            delta: if change == 0 { "~".to_string() } else { "-13.24%".to_string() },
            change,
            note: "(p=0.016 n=4+5)".to_string(),
            scaler: Scaler::new(13_600_000.0, "ns/op"),
        }
    }

    fn table(configs: &[&str], rows: Vec<Row>) -> Table {
        Table { metric: "time/op".to_string(), configs: configs.iter().map(|c| c.to_string()).collect(), rows }
    }

    fn render(tables: &[Table]) -> String {
        let mut buf = Vec::new();
        format_html(&mut buf, tables).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&#34;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_empty_output_is_only_style() {
        assert_eq!(render(&[]), HTML_STYLE);
    }

    #[test]
    fn test_old_new_markup() {
        let out = render(&[table(&["old.txt", "new.txt"], vec![row("", "BenchmarkGobEncode", 2, 1)])]);
        assert!(out.starts_with("<style>\n.benchstat { border-collapse: collapse; }"));
        assert!(out.contains("<table class='benchstat oldnew'>\n"));
        assert!(out.contains("<tr class='configs'><th><th>old.txt<th>new.txt\n"));
        assert!(out.contains("<tr><th><th colspan='2' class='metric'>time/op<th>delta\n"));
        assert!(out.contains(
            "<tr class='better'><td>BenchmarkGobEncode<td>13.6ms ± 1%<td>13.6ms ± 1%\
             <td class='delta'>-13.24%<td class='note'>(p=0.016 n=4+5)\n"
        ));
        assert!(out.ends_with("<tr><td>&nbsp;\n</tbody>\n</table>\n"));
    }

    #[test]
    fn test_unchanged_rows_use_nodelta() {
        let out = render(&[table(&["old", "new"], vec![row("", "BenchmarkX", 2, 0), row("", "BenchmarkY", 2, -1)])]);
        assert!(out.contains("<tr class='unchanged'>"));
        assert!(out.contains("<td class='nodelta'>~"));
        assert!(out.contains("<tr class='worse'>"));
    }

    #[test]
    fn test_single_config_markup() {
        let out = render(&[table(&["a.txt"], vec![row("", "BenchmarkX", 1, 0)])]);
        assert!(out.contains("<table class='benchstat'>\n<tbody>\n<tr><th><th>time/op\n"));
        assert!(!out.contains("class='configs'"));
        assert!(out.contains("<tr class='single'><td>BenchmarkX<td>13.6ms ± 1%\n"));
        assert!(!out.contains("class='note'"));
    }

    #[test]
    fn test_group_rows() {
        let rows = vec![row("pkg:a", "BenchmarkX", 3, 0), row("pkg:b", "BenchmarkX", 3, 0)];
        let out = render(&[table(&["a", "b", "c"], rows)]);
        assert!(out.contains("<tr class='group'><th colspan='4'>pkg:a\n"));
        assert!(out.contains("<tr class='group'><th colspan='4'>pkg:b\n"));
        assert!(out.contains("<tr><td>BenchmarkX<td>"));
    }

    #[test]
    fn test_one_tbody_per_table() {
        let tables = vec![
            table(&["old", "new"], vec![row("", "BenchmarkX", 2, 0)]),
            table(&["old", "new"], vec![row("", "BenchmarkY", 2, 0)]),
        ];
        let out = render(&tables);
        assert_eq!(out.matches("<tbody>").count(), 2);
        assert_eq!(out.matches("<table").count(), 1);
    }
}
