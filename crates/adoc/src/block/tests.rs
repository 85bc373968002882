use assert_matches::assert_matches;
use rstest::rstest;

use super::*;
use crate::{Token, error::LexError, lex::tokenize};

fn pt(pos: usize, kind: Kind, text: &str) -> Positioned<'_> {
    Positioned::new(pos, Token::new(kind, text))
}

fn collect(input: &str) -> Vec<Block<'_>> {
    blocks(input).collect::<Result<_>>().unwrap()
}

#[test]
fn test_simple_document() {
    assert_eq!(
        collect("= Foo\n\nBar\n"),
        vec![
            Block::Header {
                marker: pt(0, Kind::Header, "= "),
                title: pt(2, Kind::Text, "Foo"),
            },
            Block::Paragraph(vec![pt(7, Kind::Text, "Bar"), pt(10, Kind::Newline, "\n")]),
        ]
    );
}

#[test]
fn test_blocks_share_tokens_with_tokenize() {
    let input = "= Foo\n\nBar\n";
    let tokens = tokenize(input).collect::<std::result::Result<Vec<_>, _>>().unwrap();
    let blocks = collect(input);

    let Block::Header { marker, title } = &blocks[0] else {
        panic!("expected header, got {:?}", blocks[0]);
    };
    assert_eq!(marker, &tokens[0]);
    assert_eq!(title, &tokens[1]);

    let Block::Paragraph(paragraph) = &blocks[1] else {
        panic!("expected paragraph, got {:?}", blocks[1]);
    };
    assert_eq!(paragraph.as_slice(), &tokens[4..6]);
}

#[test]
fn test_empty_document() {
    assert!(collect("").is_empty());
    assert!(collect("\n\n\n").is_empty());
}

#[test]
fn test_header_at_end_of_input() {
    let blocks = collect("== Title");
    assert_eq!(
        blocks,
        vec![Block::Header {
            marker: pt(0, Kind::Header, "== "),
            title: pt(3, Kind::Text, "Title"),
        }]
    );
    assert_eq!(blocks[0].level(), Some(2));
    assert_eq!(blocks[0].span(), 0..8);
    assert_eq!(blocks[0].name(), "header");
}

#[rstest]
#[case::lf(
    "a\nb\n\nc",
    vec![
        Block::Paragraph(vec![
            pt(0, Kind::Text, "a"),
            pt(1, Kind::Newline, "\n"),
            pt(2, Kind::Text, "b"),
            pt(3, Kind::Newline, "\n"),
            pt(4, Kind::Newline, "\n"),
        ]),
        Block::Paragraph(vec![pt(5, Kind::Text, "c")]),
    ]
)]
#[case::crlf(
    "a\r\n\r\nb",
    vec![
        Block::Paragraph(vec![
            pt(0, Kind::Text, "a"),
            pt(1, Kind::Newline, "\r\n"),
            pt(3, Kind::Newline, "\r\n"),
        ]),
        Block::Paragraph(vec![pt(5, Kind::Text, "b")]),
    ]
)]
fn test_paragraph_ends_at_blank_line(#[case] input: &str, #[case] expected: Vec<Block<'static>>) {
    assert_eq!(collect(input), expected);
}

#[test]
fn test_pull_past_end() {
    let mut blocks = blocks("x");
    assert_eq!(blocks.pull().unwrap(), pt(0, Kind::Text, "x"));
    assert!(blocks.pull().unwrap().is_eof());
    assert_eq!(blocks.pull(), Err(Error::Exhausted));
    assert_eq!(blocks.pull(), Err(Error::Exhausted));
}

#[test]
fn test_paragraph_ends_at_header() {
    let blocks = collect("text\n= Next\nmore\n");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(vec![pt(0, Kind::Text, "text"), pt(4, Kind::Newline, "\n")]),
            Block::Header {
                marker: pt(5, Kind::Header, "= "),
                title: pt(7, Kind::Text, "Next"),
            },
            Block::Paragraph(vec![pt(12, Kind::Text, "more"), pt(16, Kind::Newline, "\n")]),
        ]
    );
    assert_eq!(blocks[0].level(), None);
    assert_eq!(blocks[0].name(), "paragraph");
    assert_eq!(blocks[2].span(), 12..17);
    assert_eq!(blocks[2].pos(), 12);
}

#[test]
fn test_consecutive_headers() {
    let blocks = collect("= One\n== Two\n");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].level(), Some(1));
    assert_eq!(blocks[1].level(), Some(2));
}

#[test]
fn test_header_without_title() {
    let mut blocks = blocks("= \nBar");
    assert_eq!(
        blocks.next(),
        Some(Err(Error::UnexpectedToken {
            expected: Kind::Text,
            found: Kind::Newline,
            pos: 2,
        }))
    );
    assert_eq!(blocks.next(), None);
}

#[test]
fn test_header_cut_by_end_of_input() {
    let result = blocks("Bar\n\n= ").collect::<Result<Vec<_>>>();
    assert_eq!(
        result,
        Err(Error::UnexpectedEof {
            expected: Kind::Text,
            pos: 7
        })
    );
}

#[test]
fn test_tokenize_error() {
    let mut blocks = blocks("= Foo\n=oops\n");
    assert_matches!(blocks.next(), Some(Ok(Block::Header { .. })));
    assert_matches!(
        blocks.next(),
        Some(Err(Error::Tokenize(tokstate::Error::State { pos: 6, .. })))
    );
    assert_eq!(blocks.next(), None);
}

#[test]
fn test_error_messages() {
    let err = Error::UnexpectedToken {
        expected: Kind::Text,
        found: Kind::Newline,
        pos: 2,
    };
    assert_eq!(err.to_string(), "expected text at offset 2, found newline");

    let err = Error::UnexpectedEof {
        expected: Kind::Text,
        pos: 7,
    };
    assert_eq!(err.to_string(), "expected text at offset 7, found end of input");

    let err = Error::from(tokstate::Error::State {
        pos: 6,
        source: LexError::MalformedHeader { level: 1 },
    });
    assert_eq!(
        err.to_string(),
        "parser state failed at offset 6: header marker of level 1 is not followed by a space"
    );
}

#[test]
fn test_fused() {
    let mut blocks = blocks("Bar");
    assert_matches!(blocks.next(), Some(Ok(Block::Paragraph(_))));
    assert_eq!(blocks.next(), None);
    assert_eq!(blocks.next(), None);
}
