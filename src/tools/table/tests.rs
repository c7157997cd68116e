#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::services::fetch::mock::StaticFetcher;
    use crate::tools::table::utils::*;
    use crate::tools::table::*;
    use crate::types::FieldValue;
    use scraper::{Html, Selector};

    const LIST_PAGE: &str = r#"
        <html><body>
            <table class="wikitable">
                <tr><th>Ignored</th></tr>
                <tr><td>not sortable</td></tr>
            </table>
            <table class="wikitable sortable jquery-tablesorter">
                <tbody>
                <tr><th>Animal</th><th>Young</th><th>Collateral
adjective</th></tr>
                <tr>
                    <td><a href="/wiki/Lion">Lion</a></td>
                    <td>Cub</td>
                    <td>leonine[1]</td>
                </tr>
                <tr>
                    <td><a href="/wiki/Cat">Cat</a>, <a href="/wiki/Kitten">kitten</a></td>
                    <td>Kitten or kit</td>
                    <td>feline</td>
                    <td>surplus cell</td>
                </tr>
                <tr>
                    <td><a href="/wiki/Ox">Ox</a></td>
                    <td>?</td>
                </tr>
                </tbody>
            </table>
            <table class="sortable wikitable">
                <tr><th>Animal</th><th>Female</th></tr>
                <tr><td>Goose</td><td>Goose<br>Dam</td></tr>
            </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_animal_tables_selects_sortable_only() {
        let records = parse_animal_tables(LIST_PAGE);
        assert_eq!(records.len(), 4);
        assert!(records
            .iter()
            .all(|r| r.values("Ignored").is_none()));
    }

    #[test]
    fn test_parse_animal_tables_values_and_hrefs() {
        let records = parse_animal_tables(LIST_PAGE);

        let lion = &records[0];
        assert_eq!(lion.values("Animal"), Some(&["lion".to_string()][..]));
        assert_eq!(lion.href("Animal"), Some("/wiki/Lion"));
        assert_eq!(lion.values("Young"), Some(&["cub".to_string()][..]));
        assert_eq!(lion.href("Young"), None);
        // header newline removed, footnote collapsed
        assert_eq!(
            lion.values("Collateraladjective"),
            Some(&["leonine,".to_string()][..])
        );
    }

    #[test]
    fn test_parse_animal_tables_splitting_rules() {
        let records = parse_animal_tables(LIST_PAGE);

        let cat = &records[1];
        assert_eq!(
            cat.get("Animal"),
            Some(&FieldValue::Values(vec!["cat".into(), "kitten".into()]))
        );
        // first link only
        assert_eq!(cat.href("Animal"), Some("/wiki/Cat"));
        assert_eq!(
            cat.values("Young"),
            Some(&["kitten".to_string(), "kit".to_string()][..])
        );
        // surplus cell dropped
        assert_eq!(cat.len(), 4);

        let goose = &records[3];
        assert_eq!(
            goose.values("Female"),
            Some(&["goose".to_string(), "dam".to_string()][..])
        );
    }

    #[test]
    fn test_parse_animal_tables_skips_blank_cells() {
        let records = parse_animal_tables(LIST_PAGE);

        let ox = &records[2];
        assert!(ox.contains("Animal"));
        assert!(!ox.contains("Young"), "single-char cell must be absent");
        assert!(!ox.contains("Collateraladjective"), "missing cell must be absent");
    }

    #[test]
    fn test_parse_animal_tables_no_tables() {
        let records = parse_animal_tables("<html><body><p>Nothing</p></body></html>");
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_table_header_only() {
        let html = r#"<table class="wikitable sortable"><tr><th>Animal</th></tr></table>"#;
        assert!(parse_animal_tables(html).is_empty());
    }

    #[test]
    fn test_parse_row_keeps_empty_records() {
        let html = r#"<table class="wikitable sortable">
            <tr><th>Animal</th></tr>
            <tr><td></td></tr>
        </table>"#;
        let records = parse_animal_tables(html);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_header_name_strips_newlines_only() {
        let doc = Html::parse_fragment("<table><tr><th>Collateral\nadjective </th></tr></table>");
        let th = Selector::parse("th").expect("valid selector");
        let cell = doc.select(&th).next().expect("header present");
        assert_eq!(header_name(&cell), "Collateraladjective ");
    }

    #[test]
    fn test_parse_row_fewer_cells_than_headers() {
        let doc = Html::parse_fragment("<table><tr><td>Hare</td></tr></table>");
        let tr = Selector::parse("tr").expect("valid selector");
        let row = doc.select(&tr).next().expect("row present");
        let headers = vec!["Animal".to_string(), "Young".to_string()];

        let record = parse_row(&headers, &row);
        assert_eq!(record.values("Animal"), Some(&["hare".to_string()][..]));
        assert!(!record.contains("Young"));
    }

    #[tokio::test]
    async fn test_fetch_animal_records() {
        let fetcher = StaticFetcher::new().with_page(ANIMAL_LIST_URL, LIST_PAGE);
        let records = fetch_animal_records(&fetcher).await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(fetcher.requests(), vec![ANIMAL_LIST_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_animal_records_propagates_failure() {
        let fetcher = StaticFetcher::new();
        let err = fetch_animal_records(&fetcher).await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
    }
}
