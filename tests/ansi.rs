#[cfg(test)]
mod verify {
    use pretty_assertions::assert_eq;

    use galley::ansi::{ansi_format, Color, Effect};
    use galley::items::{DefinitionStyle, Formatter, Item};

    #[test]
    fn custom_pairs_drive_the_rendered_markup() {
        let formatter = Formatter {
            auto_markup: true,
            manual_markup: false,
            strong: ansi_format(Some(Color::Red), None, &[Effect::Bold]),
            em: ansi_format(Some(Color::Fixed(128)), None, &[]),
            ..Formatter::default()
        };

        let root = Item::new(formatter);
        root.add_definition(
            "diff",
            "number",
            "Compare number.",
            DefinitionStyle::Block,
            None,
            None,
        )
        .unwrap();

        let expected = concat!(
            "\x1b[1;31mdiff\x1b[0m \x1b[38;5;128mnumber\x1b[0m\n",
            "    Compare \x1b[38;5;128mnumber\x1b[0m."
        );
        assert_eq!(root.format(), expected);
    }

    #[test]
    fn empty_pairs_leave_the_text_unstyled() {
        let formatter = Formatter {
            strong: ansi_format(None, None, &[]),
            em: ansi_format(None, None, &[]),
            ..Formatter::default()
        };

        let root = Item::new(formatter);
        root.add_definition(
            "diff",
            "number",
            "Compare number.",
            DefinitionStyle::Block,
            None,
            None,
        )
        .unwrap();

        assert_eq!(root.format(), "diff number\n    Compare number.");
    }

    #[test]
    fn true_color_pair() {
        let (start, end) = ansi_format(Some(Color::Rgb(0xad, 0xe0, 0xe0)), None, &[]);
        assert_eq!(start, "\x1b[38;2;173;224;224m");
        assert_eq!(end, "\x1b[0m");
    }
}
