use super::*;
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<String> {
    tokenize(source)
        .into_iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

#[test]
fn splits_and_trims_lines() {
    assert_eq!(texts("  x is 5  \n\tsay hi\n"), vec!["x is 5", "say hi"]);
}

#[test]
fn drops_blank_lines() {
    assert_eq!(texts("\n\n   \nsay hi\n\n"), vec!["say hi"]);
}

#[test]
fn handles_crlf_line_endings() {
    assert_eq!(texts("x is 1\r\nWhats x?\r\n"), vec!["x is 1", "Whats x?"]);
}

#[test]
fn drops_comment_lines_case_insensitively() {
    let source = "note this is ignored\nNOTE: so is this\nNote\nsay kept";
    assert_eq!(texts(source), vec!["say kept"]);
}

#[test]
fn keeps_lines_starting_with_note_as_part_of_a_word() {
    assert_eq!(texts("notebook is 5"), vec!["notebook is 5"]);
}

#[test]
fn truncates_inline_comment() {
    assert_eq!(texts("x is 5 note the answer"), vec!["x is 5"]);
    assert_eq!(texts("say hi   NoTe   loud"), vec!["say hi"]);
}

#[test]
fn inline_comment_splits_at_first_occurrence() {
    assert_eq!(texts("say a note b note c"), vec!["say a"]);
}

#[test]
fn inline_note_inside_a_word_is_not_a_comment() {
    assert_eq!(
        texts("say my notebook is full"),
        vec!["say my notebook is full"]
    );
    assert_eq!(texts("say denote this"), vec!["say denote this"]);
}

#[test]
fn trailing_note_without_following_space_is_kept() {
    assert_eq!(texts("say take note"), vec!["say take note"]);
}

#[test]
fn records_source_line_numbers() {
    let tokens = tokenize("\nx is 1\nnote skip\n\nsay hi");
    let lines: Vec<u32> = tokens.iter().map(Token::line).collect();
    assert_eq!(lines, vec![2, 5]);
}

#[test]
fn token_display_is_its_text() {
    let token = Token::new("say hi", 3);
    assert_eq!(token.to_string(), "say hi");
    assert_eq!(token.as_ref(), "say hi");
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(tokenize("").is_empty());
}
