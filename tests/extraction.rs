mod harness;

use harness::fixtures;
use rstest::rstest;

use sqltables_app::{TableNameExtractor, parse_table_names, unquote_names};

#[rstest]
#[case(fixtures::SELECT_WITH_WHERE, &["users"])]
#[case(fixtures::QUOTED_JOIN, &["`mydb`.`orders`", "customers"])]
#[case(fixtures::UPDATE, &["accounts"])]
#[case(fixtures::INSERT_WITH_LITERAL, &["logs"])]
#[case("", &[])]
#[case("FROM", &[])]
fn documented_scenarios(#[case] sql: &str, #[case] expected: &[&str]) {
    assert_eq!(parse_table_names(sql), expected);
}

#[test]
fn multiline_query_keeps_literal_spellings() {
    let names = parse_table_names(fixtures::MULTILINE_REPORT);

    assert_eq!(
        names,
        vec![
            "`shop`.`orders`",
            "customers",
            "shop.orders_archive",
            "`customers`",
        ]
    );
}

#[test]
fn unquoting_is_a_separate_step() {
    let names = parse_table_names(fixtures::MULTILINE_REPORT);

    assert_eq!(
        unquote_names(&names),
        vec!["shop.orders", "customers", "shop.orders_archive"]
    );
}

#[test]
fn shared_extractor_gives_same_result_on_every_thread() {
    let extractor = TableNameExtractor::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = [fixtures::QUOTED_JOIN, fixtures::UPDATE, fixtures::QUOTED_JOIN]
            .into_iter()
            .map(|sql| {
                let extractor = &extractor;
                scope.spawn(move || extractor.parse(sql))
            })
            .collect();
        let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results[0], vec!["`mydb`.`orders`", "customers"]);
        assert_eq!(results[1], vec!["accounts"]);
        assert_eq!(results[0], results[2]);
    });
}

#[test]
fn repeated_calls_do_not_share_state() {
    let extractor = TableNameExtractor::new();

    assert_eq!(extractor.parse(fixtures::UPDATE), vec!["accounts"]);
    assert_eq!(extractor.parse(fixtures::SELECT_WITH_WHERE), vec!["users"]);
}
