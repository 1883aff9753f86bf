use super::*;

#[test]
fn rejects_empty_confession_text() {
    assert_eq!(
        validate_confession_input(""),
        Err("Пожалуйста, напишите Confession!")
    );
}

#[test]
fn rejects_whitespace_only_confession_text() {
    assert_eq!(
        validate_confession_input("  \n\t "),
        Err("Пожалуйста, напишите Confession!")
    );
}

#[test]
fn accepts_non_empty_confession_text() {
    assert_eq!(validate_confession_input("мой первый пост"), Ok(()));
    assert_eq!(validate_confession_input("  padded  "), Ok(()));
}
