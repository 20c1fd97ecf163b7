//! End-to-end integration tests
//!
//! These tests validate the complete analytics pipeline using predefined
//! fixtures. Each test:
//! 1. Reads input.txt from a fixture directory
//! 2. Loads catalog.json from the same directory when present
//! 3. Runs the pipeline with the filters given for that fixture
//! 4. Renders the report with a fixed timestamp
//! 5. Compares the rendered report with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path with comma-formatted prices and product names
//! - Malformed lines and every validation rule
//! - Region and amount filters combined with catalog enrichment
//! - A feed containing only the header

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rstest::rstest;
    use sales_analytics::catalog::parse_catalog;
    use sales_analytics::io::{read_sales_lines, render_report, split_header, write_enriched_csv};
    use sales_analytics::types::create_product_mapping;
    use sales_analytics::{run_pipeline, FilterOptions, PipelineConfig, ProductMapping, SalesReport};
    use std::fs;
    use std::path::Path;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    /// Run the pipeline over a fixture directory
    fn run_fixture(fixture_dir: &str, filters: FilterOptions) -> SalesReport {
        let input_path = format!("{}/input.txt", fixture_dir);
        let catalog_path = format!("{}/catalog.json", fixture_dir);

        let lines = read_sales_lines(Path::new(&input_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", input_path, e));
        let (_, data_lines) = split_header(&lines);

        let mapping = if Path::new(&catalog_path).exists() {
            let json = fs::read_to_string(&catalog_path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", catalog_path, e));
            create_product_mapping(parse_catalog(&json).expect("Fixture catalog must parse"))
        } else {
            ProductMapping::new()
        };

        let config = PipelineConfig {
            filters,
            ..PipelineConfig::default()
        };
        run_pipeline(data_lines, &mapping, &config)
    }

    /// Render the fixture report and compare it with expected.txt
    fn run_test_fixture(fixture_name: &str, filters: FilterOptions) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        let report = run_fixture(&fixture_dir, filters);

        let mut output = Vec::new();
        render_report(&report, timestamp(), &mut output)
            .unwrap_or_else(|e| panic!("Failed to render report: {}", e));
        let actual_output = String::from_utf8(output).expect("Report must be UTF-8");

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    fn north_over_1000() -> FilterOptions {
        FilterOptions {
            region: Some("North".to_string()),
            min_amount: Some(1000.0),
            max_amount: None,
        }
    }

    /// End-to-end test for all fixtures
    #[rstest]
    #[case("happy_path", FilterOptions::default())]
    #[case("malformed_data", FilterOptions::default())]
    #[case("filtered_enriched", north_over_1000())]
    #[case("empty_feed", FilterOptions::default())]
    fn test_fixtures(#[case] fixture: &str, #[case] filters: FilterOptions) {
        run_test_fixture(fixture, filters);
    }

    #[test]
    fn test_every_parsed_record_is_classified_once() {
        let report = run_fixture("tests/fixtures/malformed_data", FilterOptions::default());
        let summary = &report.summary;

        assert_eq!(summary.total_input, report.parsed_count);
        assert_eq!(summary.invalid + summary.final_count, summary.total_input);
    }

    #[test]
    fn test_enriched_export_for_filtered_fixture() {
        let report = run_fixture("tests/fixtures/filtered_enriched", north_over_1000());

        let mut output = Vec::new();
        write_enriched_csv(&report.transactions, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let rows: Vec<&str> = csv.lines().collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1],
            "T001,2024-12-01,P1,Mascara,10,350.0,C001,North,Essence Mascara Lash Princess,beauty,Essence,9.99,4.94"
        );
        assert!(rows[2]
            .starts_with("T004,2024-12-02,P30,Sofa,1,60000.0,C001,North,Knoll Saarinen"));
        assert!(rows[3].ends_with(",North,,,,,"));
    }

    #[test]
    fn test_region_filter_applied_twice_is_stable() {
        let filters = FilterOptions {
            region: Some("North".to_string()),
            ..FilterOptions::default()
        };

        let first = run_fixture("tests/fixtures/happy_path", filters.clone());
        let lines: Vec<String> = first
            .transactions
            .iter()
            .map(|tx| {
                format!(
                    "{}|{}|{}|{}|{}|{}|{}|{}",
                    tx.transaction_id,
                    tx.date,
                    tx.product_id,
                    tx.product_name,
                    tx.quantity,
                    tx.unit_price,
                    tx.customer_id,
                    tx.region
                )
            })
            .collect();
        let config = PipelineConfig {
            filters,
            ..PipelineConfig::default()
        };
        let second = run_pipeline(&lines, &ProductMapping::new(), &config);

        assert_eq!(first.transactions, second.transactions);
        assert_eq!(second.summary.filtered_by_region, 0);
    }
}
