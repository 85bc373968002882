use super::*;
use rstest::rstest;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("tokdump").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_defaults_come_from_settings() {
    let opt = parse(&[]);
    let settings = Settings {
        mode: Mode::Blocks,
        format: Format::Json,
        positions: true,
    };
    assert_eq!(
        opt.options(&settings),
        Options {
            mode: Mode::Blocks,
            format: Format::Json,
            positions: true,
        }
    );
    assert_eq!(opt.inputs(), vec![Input::Stdin]);
}

#[test]
fn test_flags_override_settings() {
    let opt = parse(&["--mode", "blocks", "-f", "json", "-P"]);
    assert_eq!(
        opt.options(&Settings::default()),
        Options {
            mode: Mode::Blocks,
            format: Format::Json,
            positions: false,
        }
    );
}

#[rstest]
#[case(&["a.adoc"], vec![Input::File("a.adoc".into())])]
#[case(&["-"], vec![Input::Stdin])]
#[case(&["a.adoc", "-", "b.adoc"], vec![Input::File("a.adoc".into()), Input::Stdin, Input::File("b.adoc".into())])]
fn test_inputs(#[case] args: &[&str], #[case] expected: Vec<Input>) {
    assert_eq!(parse(args).inputs(), expected);
}

#[test]
fn test_unknown_mode() {
    assert!(Opt::try_parse_from(["tokdump", "--mode", "bytes"]).is_err());
}
