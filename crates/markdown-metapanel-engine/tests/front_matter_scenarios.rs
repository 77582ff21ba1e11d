use markdown_metapanel_engine::{
    Entry, EntryValue, Limits, MetadataPanel, PanelValue, parse_front_matter, render_cycle,
};
use markdown_metapanel_engine::frontmatter::{
    DropReason, MAX_ARRAY_ITEMS, MAX_KEYS, MAX_VALUE_LENGTH, TRUNCATION_MARKER,
    parse_metadata_with_report,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse(doc: &str) -> Vec<Entry> {
    parse_front_matter(doc, &Limits::default())
        .map(|meta| meta.entries().to_vec())
        .unwrap_or_default()
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

/// Every string a panel exposes.
fn panel_strings(panel: &MetadataPanel) -> Vec<&str> {
    let mut out = Vec::new();
    for row in panel.rows() {
        out.push(row.key.as_str());
        match &row.value {
            PanelValue::Scalar(text) => out.push(text.as_str()),
            PanelValue::List(items) => out.extend(items.iter().map(|i| i.as_str())),
        }
    }
    out
}

// Scenarios

#[test]
fn anchor_line_is_dropped() {
    let entries = parse("---\nanchor: &bomb \"BOOM\"\ntitle: Test\n---\n");
    assert_eq!(entries, vec![Entry::scalar("title", "Test")]);
}

#[test]
fn orphan_item_is_suppressed() {
    let entries = parse("---\n- orphan1\ntitle: Test\ntags:\n- valid1\n- valid2\n---\n");
    assert_eq!(
        entries,
        vec![
            Entry::scalar("title", "Test"),
            Entry::list("tags", ["valid1", "valid2"]),
        ]
    );
}

#[test]
fn script_value_is_escaped() {
    let rendered = render_cycle(
        "---\ntitle: \"<script>alert(1)</script>\"\n---\n",
        &Limits::default(),
    );
    let panel = rendered.panel.unwrap();
    assert_eq!(
        panel.rows()[0].value,
        PanelValue::Scalar(markdown_metapanel_engine::EscapedText::escape(
            "<script>alert(1)</script>"
        ))
    );
    let html = panel.to_html();
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn only_first_hundred_keys_survive() {
    let mut doc = String::from("---\n");
    for n in 0..110 {
        doc.push_str(&format!("key_{n}: value_{n}\n"));
    }
    doc.push_str("---\n");

    let entries = parse(&doc);
    let keys: Vec<_> = entries.iter().map(|e| e.key.clone()).collect();
    let expected: Vec<_> = (0..100).map(|n| format!("key_{n}")).collect();
    assert_eq!(keys, expected);
}

#[test]
fn empty_block_is_absent() {
    assert_eq!(parse_front_matter("---\n---\n", &Limits::default()), None);
    assert_eq!(render_cycle("---\n---\n", &Limits::default()).panel, None);
}

#[test]
fn huge_scalar_is_truncated() {
    let doc = format!("---\nbig: {}\n---\n", "x".repeat(15_000));
    let entries = parse(&doc);
    assert_eq!(entries.len(), 1);

    let expected = format!("{}{}", "x".repeat(10_000), TRUNCATION_MARKER);
    assert_eq!(entries[0].value, EntryValue::Scalar(expected));
    assert!(entries[0].truncated);
}

// Properties

#[rstest]
#[case::no_opening("title: x\n---\n")]
#[case::no_closing("---\ntitle: x\n")]
#[case::blank_block("---\n\n\n---\nbody")]
#[case::comment_block("---\n# a\n# b\n---\nbody")]
fn absence(#[case] doc: &str) {
    let rendered = render_cycle(doc, &Limits::default());
    assert_eq!(rendered.panel, None);
    assert_eq!(rendered.body, doc);
}

#[rstest]
#[case::anchor_value("secret: &leak payload")]
#[case::alias_value("secret: *leak")]
#[case::tag_value("secret: !leak payload")]
#[case::core_tag_value("secret: !!leak payload")]
#[case::merge_key("<<: secret")]
#[case::anchor_key("&secret: payload")]
#[case::alias_key("*secret: payload")]
#[case::tag_key("!secret: payload")]
#[case::flow_alias("secret: [ok, *leak]")]
#[case::flow_mapping_alias("secret: {k: *leak}")]
#[case::flow_mapping_tag("secret: {k: !!python/object:os.system payload}")]
#[case::nested_mapping_anchor("secret: inner: &leak payload")]
fn deny_list_leaves_no_trace(#[case] line: &str) {
    let doc = format!("---\nbefore: ok\n{line}\nafter: ok\n---\n");
    let rendered = render_cycle(&doc, &Limits::default());
    let panel = rendered.panel.unwrap();

    let strings = panel_strings(&panel);
    assert_eq!(strings, vec!["before", "ok", "after", "ok"]);
    assert!(!panel.to_html().contains("secret"));
    assert!(!panel.to_html().contains("payload"));
    assert_eq!(rendered.report.dangerous(), 1);
}

#[rstest]
#[case::nested_alias("- name: *secret")]
#[case::nested_anchor("- name: &secret payload")]
#[case::flow_mapping_tag("- {k: !secret payload}")]
fn dangerous_array_item_leaves_no_trace(#[case] item: &str) {
    let doc = format!("---\ntags:\n- ok\n{item}\n- fine\n---\n");
    let rendered = render_cycle(&doc, &Limits::default());
    let panel = rendered.panel.unwrap();

    assert_eq!(panel_strings(&panel), vec!["tags", "ok", "fine"]);
    assert!(!panel.to_html().contains("secret"));
    assert!(!panel.to_html().contains("payload"));
    assert_eq!(rendered.report.dangerous(), 1);
}

#[test]
fn quoted_specials_are_values_not_constructs() {
    let entries = parse("---\na: \"&x\"\nb: '*y'\nc: \"!!z\"\n---\n");
    assert_eq!(
        entries,
        vec![
            Entry::scalar("a", "&x"),
            Entry::scalar("b", "*y"),
            Entry::scalar("c", "!!z"),
        ]
    );
}

#[test]
fn parsing_is_idempotent() {
    let doc = fixture("kitchen_sink");
    let first = parse_front_matter(&doc, &Limits::default());
    let second = parse_front_matter(&doc, &Limits::default());
    assert_eq!(first, second);
}

#[test]
fn output_is_bounded_for_oversized_input() {
    let mut doc = String::from("---\n");
    for k in 0..150 {
        doc.push_str(&format!("list_{k}:\n"));
        for i in 0..600 {
            doc.push_str(&format!("  - item_{i}\n"));
        }
        doc.push_str(&format!("long_{k}: {}\n", "y".repeat(12_000)));
    }
    doc.push_str("---\n");

    let block = markdown_metapanel_engine::extract_block(&doc).unwrap();
    let (meta, report) = parse_metadata_with_report(&block.lines, &Limits::default());

    assert_eq!(meta.len(), MAX_KEYS);
    for entry in meta.entries() {
        match &entry.value {
            EntryValue::List(items) => assert!(items.len() <= MAX_ARRAY_ITEMS),
            EntryValue::Scalar(s) => {
                assert!(s.chars().count() <= MAX_VALUE_LENGTH + TRUNCATION_MARKER.len())
            }
        }
    }
    assert!(report.dropped(DropReason::KeyLimit) > 0);
    assert!(report.dropped(DropReason::ItemLimit) > 0);
}

#[test]
fn escaping_is_total() {
    let doc = "---\n\"<k'>\": \"a&b<c>d'e\\\"f\"\nlist:\n- <x>\n- 'it''s'\n---\n";
    let panel = render_cycle(doc, &Limits::default()).panel.unwrap();
    assert_eq!(panel.len(), 2);

    for s in panel_strings(&panel) {
        assert!(!s.contains(['<', '>', '"', '\'']), "unescaped char in {s:?}");
        for (idx, _) in s.match_indices('&') {
            let rest = &s[idx..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;", "&#39;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "bare ampersand in {s:?}"
            );
        }
    }
}

#[test]
fn configured_limits_tighten_output() {
    let limits = Limits::new(1, 1, 5, 256);
    let doc = "---\ntags:\n- abcdefgh\n- second\nother: x\n---\n";
    let meta = parse_front_matter(doc, &limits).unwrap();
    assert_eq!(
        meta.entries(),
        &[Entry {
            key: "tags".to_string(),
            value: EntryValue::List(vec!["abcde[truncated]".to_string()]),
            truncated: true,
        }]
    );
}

// Fixtures

#[test]
fn fixture_billion_laughs() {
    let doc = fixture("billion_laughs");
    let rendered = render_cycle(&doc, &Limits::default());

    let panel = rendered.panel.unwrap();
    assert_eq!(panel_strings(&panel), vec!["lols", "", "title", "Survived"]);
    assert_eq!(rendered.report.dangerous(), 7);
    assert_eq!(rendered.body, "# Still renders\n");
}

#[test]
fn fixture_type_tags() {
    let doc = fixture("type_tags");
    let entries = parse(&doc);
    assert_eq!(
        entries,
        vec![
            Entry::scalar("quoted", "!!not a tag"),
            Entry::scalar("title", "Tags"),
        ]
    );
}

#[test]
fn fixture_kitchen_sink() {
    let doc = fixture("kitchen_sink");
    let rendered = render_cycle(&doc, &Limits::default());
    let meta = parse_front_matter(&doc, &Limits::default()).unwrap();

    assert_eq!(
        meta.entries(),
        &[
            Entry::scalar("title", "Quarterly <Report>"),
            Entry::scalar("author", "O'Brien & Sons"),
            Entry::scalar("draft", "false"),
            Entry::scalar("url", "https://example.com/a?b=1&c=2"),
            Entry::list("tags", ["finance", "q3", "internal"]),
            Entry::scalar("summary", ""),
            Entry::scalar("notes", ""),
            Entry::scalar("empty", ""),
        ]
    );
    assert_eq!(rendered.body, "Body text with <em>inline html</em>.\n");
    assert_eq!(rendered.report.dropped(DropReason::Orphan), 2);
    assert!(rendered.to_html().contains("Quarterly &lt;Report&gt;"));
}
