//! Integration tests for sheetfeed

use sheetfeed::{parse_csv, CsvEncoder, Inventory, PuzzleCalendar, Table};
use std::io::Write;
use tempfile::NamedTempFile;

fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_encode_then_parse_restores_table() {
    let tables: Vec<Vec<Vec<String>>> = vec![
        owned(&[&["a"]]),
        owned(&[&["a", "b"], &["c", "d"]]),
        owned(&[&["", "x", ""], &["y", ""]]),
        owned(&[&["comma, inside", "quote \" inside", "both \",\""]]),
        owned(&[&["line\nbreak", "crlf\r\nbreak", "cr\ronly"], &["next"]]),
        owned(&[&["  padded  ", "\"\"", "\"starts"], &["ends\"", ",", "\n"]]),
        owned(&[&["⭐", "naïve", "日本語"], &["🎲, 🎯", "\"é\""]]),
    ];

    let encoder = CsvEncoder::default();
    for table in tables {
        let text = encoder.encode_rows(&table);
        assert_eq!(parse_csv(&text), table, "round trip of {:?}", text);
    }
}

#[test]
fn test_encode_then_parse_generated_tables() {
    let alphabet = ["a", "Z", "0", " ", ",", "\"", "\n", "\r", "é", "-"];
    let encoder = CsvEncoder::default();

    for seed in 0..200usize {
        let width = seed % 4 + 2;
        let height = seed % 5 + 1;
        let table: Vec<Vec<String>> = (0..height)
            .map(|r| {
                (0..width)
                    .map(|c| {
                        let len = (seed + r * 3 + c * 7) % 6;
                        (0..len)
                            .map(|i| alphabet[(seed * 31 + r * 17 + c * 13 + i * 5) % alphabet.len()])
                            .collect()
                    })
                    .collect()
            })
            .collect();

        let text = encoder.encode_rows(&table);
        assert_eq!(parse_csv(&text), table, "seed {}", seed);
    }
}

#[test]
fn test_blank_lines_skipped() {
    assert_eq!(parse_csv("a,b\n\nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_quoted_comma_preserved() {
    assert_eq!(parse_csv(r#"a,"b,c",d"#), vec![vec!["a", "b,c", "d"]]);
}

#[test]
fn test_embedded_newline_in_quotes() {
    assert_eq!(
        parse_csv("\"line1\nline2\",x"),
        vec![vec!["line1\nline2", "x"]]
    );
}

#[test]
fn test_escaped_quote() {
    assert_eq!(
        parse_csv(r#""he said ""hi""",y"#),
        vec![vec![r#"he said "hi""#, "y"]]
    );
}

#[test]
fn test_no_trailing_terminator() {
    assert_eq!(parse_csv("a,b"), vec![vec!["a", "b"]]);
}

#[test]
fn test_empty_input() {
    assert!(parse_csv("").is_empty());
}

#[test]
fn test_crlf_matches_lf() {
    let lf = "date,title\n2025-01-01,\"a,b\"\n\n2025-01-02,c\n";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(parse_csv(&crlf), parse_csv(lf));
}

#[test]
fn test_calendar_sheet_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "date,url,title,source,star,scoring,active\r\n\
         2025-11-01,https://example.com/1,Slitherlink,,*,\"Solve: 10\r\nFast: +5\",TRUE\r\n\
         \r\n\
         2025-11-02,https://example.com/2,Hidden,,,,0\r\n"
    )
    .unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let calendar = PuzzleCalendar::parse(&text);
    assert_eq!(calendar.len(), 1);

    let puzzle = calendar.get("2025-11-01").unwrap();
    assert_eq!(puzzle.title, "Slitherlink");
    assert!(puzzle.has_star());
    assert_eq!(puzzle.scoring, "Solve: 10\r\nFast: +5");
}

#[test]
fn test_table_and_inventory_share_parsing() {
    let text = "item,Ana,Ben\n\"Map, torn\",1,\nCoin,12,3\n";

    let table = Table::parse(text);
    assert_eq!(table.headers(), ["item", "Ana", "Ben"]);
    assert_eq!(table.records()[0].get("item"), "Map, torn");

    let inventory = Inventory::parse(text);
    let ana: Vec<_> = inventory.items("Ana").iter().map(|i| i.item.as_str()).collect();
    assert_eq!(ana, ["Map, torn", "Coin"]);
    assert_eq!(inventory.items("Ben").len(), 1);
}

#[test]
fn test_parse_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("n,sq\n{},\"{}\"\n", i, i * i);
                parse_csv(&text)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let rows = handle.join().unwrap();
        assert_eq!(rows[1], vec![i.to_string(), (i * i).to_string()]);
    }
}
