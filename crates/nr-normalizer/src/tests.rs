use crate::*;
use crate::rewrite::{default_rules, rewrite, BODY_INDENT};
use crate::{blank, dedup, fold, highlight};
use nr_core::types::Span;

fn rule(name: &str) -> &'static ReplacementRule {
    DEFAULT_RULES.iter().find(|r| r.name() == name).unwrap()
}

// ========== Fold ==========

#[test]
fn test_fold_domain() {
    assert_eq!(fold::fold("019AZaz."), "０１９ＡＺａｚ．");
}

#[test]
fn test_fold_passthrough() {
    let text = "日本語　テスト、。「」-,;";
    assert_eq!(fold::fold(text), text);
    assert!(fold::is_folded(text));
}

#[test]
fn test_fold_full_width_noop() {
    let text = "１０００　　ＯＮ";
    assert_eq!(fold::fold(text), text);
}

#[test]
fn test_fold_keeps_layout() {
    assert_eq!(fold::fold("V3, 1\nab c"), "Ｖ３, １\nａｂ ｃ");
}

#[test]
fn test_fold_char() {
    assert_eq!(fold::fold_char('5'), '５');
    assert_eq!(fold::fold_char('-'), '-');
    assert_eq!(fold::fold_char('\n'), '\n');
}

// ========== Collapse ==========

#[test]
fn test_collapse_run() {
    assert_eq!(blank::collapse("a\n\n\n\nb\n"), "a\n\nb\n");
}

#[test]
fn test_collapse_single_blank_kept() {
    assert_eq!(blank::collapse("a\n\nb"), "a\n\nb");
}

#[test]
fn test_collapse_leading() {
    assert_eq!(blank::collapse("\n\n\na"), "\na");
}

#[test]
fn test_collapse_whitespace_only_lines() {
    assert_eq!(blank::collapse("a\n  \n\u{3000}\nb"), "a\n  \nb");
}

#[test]
fn test_line_endings() {
    assert_eq!(blank::normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    assert_eq!(blank::normalize_line_endings("a\r\r\nb"), "a\n\nb");
    assert_eq!(blank::normalize_line_endings("plain\n"), "plain\n");
}

#[test]
fn test_collapse_empty() {
    assert_eq!(blank::collapse(""), "");
}

// ========== Suppress ==========

#[test]
fn test_suppress_first_occurrence() {
    assert_eq!(dedup::suppress("1000 A\n1000 B\n"), "1000 B");
}

#[test]
fn test_suppress_no_repeats() {
    assert_eq!(dedup::suppress("1000 A\n2000 B"), "1000 A\n2000 B");
}

#[test]
fn test_suppress_word_bounded() {
    // 12345 is not a 4-digit token
    assert_eq!(dedup::suppress("12345 1234\n1234 x"), "1234 x");
    assert!(dedup::repeated_tokens("12345 12345").is_empty());
}

#[test]
fn test_suppress_one_token_per_line() {
    let (text, resolved) = dedup::suppress_with_report("1000 2000\n2000 x\n1000 y\n2000 z");
    assert_eq!(text, "1000 y\n2000 z");
    assert_eq!(resolved, vec!["1000".to_string(), "2000".to_string()]);
}

#[test]
fn test_suppress_removed_count() {
    let input = "0100 a\n0200 b\n0100 c\n0300 d\n0200 e\n0400 f";
    let repeated = dedup::repeated_tokens(input);
    assert_eq!(repeated.len(), 2);
    assert_eq!(repeated["0100"], 2);
    let out = dedup::suppress(input);
    assert_eq!(input.lines().count() - out.lines().count(), repeated.len());
    assert_eq!(out, "0100 c\n0300 d\n0200 e\n0400 f");
}

// ========== Rewrite rules ==========

#[test]
fn test_rule_order_names() {
    let names: Vec<_> = DEFAULT_RULES.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec![
        "version_gap", "time_code", "leading_n", "indent_before_indented",
        "indent_before_word", "record_block", "indent_unmarked",
    ]);
}

#[test]
fn test_rule_version_gap() {
    let r = rule("version_gap");
    assert_eq!(r.apply("V3, 1\n\n\nbody"), "body");
    assert_eq!(r.apply("V3, 1\nbody"), "V3, 1\nbody");
}

#[test]
fn test_rule_time_code() {
    assert_eq!(rule("time_code").apply("00;12;34;05 cue"), "1234 cue");
}

#[test]
fn test_rule_leading_n() {
    let r = rule("leading_n");
    assert_eq!(r.apply("N\u{3000}\u{3000}body\nnext\n"), "body\nnext\n");
    assert_eq!(r.apply("Ｎ story\n"), "story\n");
    // last line without a newline is left alone
    assert_eq!(r.apply("N tail"), "N tail");
    assert_eq!(r.apply("Now here\n"), "Now here\n");
}

#[test]
fn test_rule_indent_before_indented() {
    let r = rule("indent_before_indented");
    assert_eq!(r.apply("  foo bar\n  baz\n"), "foo bar\n  baz\n");
}

#[test]
fn test_rule_indent_before_word() {
    let r = rule("indent_before_word");
    assert_eq!(r.apply("  word\nnext line\n"), "word\nnext line\n");
    assert_eq!(r.apply("  two words\n"), "  two words\n");
}

#[test]
fn test_rule_record_block() {
    let r = rule("record_block");
    assert_eq!(
        r.apply("1000 - 2000\nV3, 1\nbody text\n"),
        "1000\u{3000}\u{3000}N\u{3000}\u{3000}body text\n\n2000\u{3000}\u{3000}ON\n"
    );
}

#[test]
fn test_rule_record_block_without_body() {
    let r = rule("record_block");
    assert_eq!(
        r.apply("1000 - 2000\nV3, 1\n\nnext"),
        "1000\u{3000}\u{3000}N\u{3000}\u{3000}\n\n2000\u{3000}\u{3000}ON\n\nnext"
    );
}

#[test]
fn test_rule_indent_unmarked() {
    let r = rule("indent_unmarked");
    let input = "1000\u{3000}\u{3000}N\u{3000}\u{3000}a\nplain\n\n2000 ON";
    let expected = format!("1000\u{3000}\u{3000}N\u{3000}\u{3000}a\n{BODY_INDENT}plain\n\n2000 ON");
    assert_eq!(r.apply(input), expected);
}

#[test]
fn test_rewrite_fixed_order() {
    let out = rewrite("1000 - 2000\nV3, 1\nbody text\n", &DEFAULT_RULES);
    assert_eq!(out, "1000　　N　　body text\n\n2000　　ON\n");
}

#[test]
fn test_rewrite_reordered_differs() {
    let input = "1000 - 2000\nV3, 1\nbody text\n";
    let mut reversed = default_rules().unwrap();
    reversed.reverse();
    let out = rewrite(input, &reversed);
    assert_ne!(out, rewrite(input, &DEFAULT_RULES));
    assert!(!out.contains("ON"));
}

#[test]
fn test_rewrite_no_rules() {
    assert_eq!(rewrite("anything", &[]), "anything");
}

// ========== Highlight ==========

#[test]
fn test_highlight_exact() {
    let spans = highlight::split_spans("１０００　　ＯＮ　　extra");
    assert_eq!(spans, vec![Span::highlighted("１０００　　ＯＮ"), Span::plain("　　extra")]);
}

#[test]
fn test_highlight_no_match() {
    let spans = highlight::split_spans("１０００　　Ｎ　　ｂｏｄｙ");
    assert_eq!(spans, vec![Span::plain("１０００　　Ｎ　　ｂｏｄｙ")]);
}

#[test]
fn test_highlight_empty() {
    assert!(highlight::split_spans("").is_empty());
}

#[test]
fn test_highlight_requires_folded_form() {
    assert_eq!(highlight::count_record_ends("1000\u{3000}\u{3000}ON"), 0);
    assert_eq!(highlight::count_record_ends("１０００\u{3000}ＯＮ"), 0);
}

#[test]
fn test_highlight_adjacent() {
    let spans = highlight::split_spans("前２０００　　ＯＮ３０００　　ＯＮ");
    assert_eq!(spans, vec![
        Span::plain("前"),
        Span::highlighted("２０００　　ＯＮ"),
        Span::highlighted("３０００　　ＯＮ"),
    ]);
}

// ========== Pipeline ==========

#[test]
fn test_pipeline_stage_order() {
    let r = NormalizerPipeline::new().run("text");
    assert_eq!(r.stages_applied, Stage::ORDER.to_vec());
    // unmarked lines pick up the body indent
    assert_eq!(r.output, format!("{BODY_INDENT}ｔｅｘｔ"));
}

#[test]
fn test_pipeline_single_record() {
    let r = NormalizerPipeline::new().run("1000 - 2000\nV3, 1\nbody text\n");
    assert_eq!(r.output, "１０００　　Ｎ　　ｂｏｄｙ ｔｅｘｔ\n\n２０００　　ＯＮ");
    assert_eq!(r.removed_lines(), 0);
}

#[test]
fn test_pipeline_crlf_record() {
    let unix = NormalizerPipeline::new().annotate("1000 - 2000\nV3, 1\nbody text\n");
    let crlf = NormalizerPipeline::new().annotate("1000 - 2000\r\nV3, 1\r\nbody text\r\n");
    let cr = NormalizerPipeline::new().annotate("1000 - 2000\rV3, 1\rbody text\r");
    assert_eq!(crlf.highlighted_count(), 1);
    assert_eq!(crlf.text(), unix.text());
    assert_eq!(cr.text(), unix.text());
    assert!(!crlf.text().contains('\r'));
}

#[test]
fn test_pipeline_crlf_duplicates() {
    let r = NormalizerPipeline::new().run("1000 first\r\n1000 second\r\n");
    assert_eq!(r.suppressed_tokens, vec!["1000".to_string()]);
    assert_eq!(r.removed_lines(), 1);
}

#[test]
fn test_pipeline_run_stage() {
    let p = NormalizerPipeline::default();
    assert_eq!(p.run_stage(Stage::Collapse, "a\n\n\nb"), "a\n\nb");
    assert_eq!(p.run_stage(Stage::Fold, "a"), "ａ");
}

#[test]
fn test_pipeline_custom_rules() {
    let rules = vec![ReplacementRule::replace("x", "cat", "dog").unwrap()];
    let p = NormalizerPipeline::with_rules(&rules);
    assert_eq!(p.run("cat").output, "ｄｏｇ");
}

#[test]
fn test_annotate_two_records() {
    let raw = "00;10;00;05 opening cue\n1000 - 1100\nV1, 1\nfirst story\n\n\nplain body line\n1200 - 1300\nV1, 2\nsecond story\n";
    let a = NormalizerPipeline::new().annotate(raw);

    let expected = fold::fold(&format!(
        "1000　　N　　first story\n\n1100　　ON\n\n{BODY_INDENT}plain body line\n1200　　N　　second story\n\n1300　　ON"
    ));
    assert_eq!(a.text(), expected);
    assert_eq!(a.normalized.suppressed_tokens, vec!["1000".to_string()]);
    assert_eq!(a.highlighted_count(), 2);
    assert_eq!(a.spans.len(), 4);
    assert_eq!(a.spans[1], Span::highlighted("１１００　　ＯＮ"));
    assert_eq!(a.spans[3], Span::highlighted("１３００　　ＯＮ"));
    assert!(!a.text().chars().any(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_annotate_empty() {
    let a = NormalizerPipeline::new().annotate("");
    assert!(a.spans.is_empty());
    assert_eq!(a.text(), "");
}
