use super::*;

fn raw_question() -> RawQuestion {
    RawQuestion {
        keyword: "tea".to_owned(),
        category: "example category".to_owned(),
        question: "What tea?".to_owned(),
        choice: vec![
            "Green".to_owned(),
            "Black".to_owned(),
            "Oolong".to_owned(),
            "White".to_owned(),
        ],
        year: "1990s".to_owned(),
        reference_url: "http://x".to_owned(),
    }
}

#[test]
fn collapses_line_breaks() {
    assert_eq!(clean_question_text("What tea?\nline2"), "What tea? line2");
    assert_eq!(clean_question_text("a\r\nb\rc"), "a b c");
    assert_eq!(clean_question_text("  padded \n"), "padded");
    assert_eq!(clean_question_text("a\n\nb"), "a  b");
}

#[test]
fn counter_is_dense_and_increasing() {
    let mut counter = IdCounter::new();
    let ids: Vec<u32> = (0..5).map(|_| counter.next().ordinal()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(counter.next().ordinal(), 6);
}

#[test]
fn formats_ids_with_padding() {
    let format = IdFormat::default();
    let mut counter = IdCounter::new();
    assert_eq!(format.format(counter.next()), "Q001");

    let format = IdFormat {
        prefix: "X-".to_owned(),
        width: 1,
    };
    for _ in 0..10 {
        counter.next();
    }
    assert_eq!(format.format(counter.next()), "X-12");
}

#[test]
fn wide_ordinals_are_not_truncated() {
    let format = IdFormat::default();
    assert_eq!(format.format(QuestionId(1000)), "Q1000");
}

#[test]
fn serializes_fields_in_order() {
    let question = Question::new("Q007".to_owned(), raw_question(), "claude");
    let json = serde_json::to_string(&question).unwrap();
    assert_eq!(
        json,
        r#"{"questionID":"Q007","keyword":"tea","category":"example category","question":"What tea?","choice":["Green","Black","Oolong","White"],"year":"1990s","reference_url":"http://x","authored_by":"claude"}"#
    );
}
