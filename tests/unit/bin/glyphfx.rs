use super::*;

#[test]
fn hex_colors_parse_with_optional_alpha() {
    assert_eq!(parse_hex_color("ff8000"), Ok(Rgba8::new(255, 128, 0, 255)));
    assert_eq!(parse_hex_color("#10203040"), Ok(Rgba8::new(16, 32, 48, 64)));
    assert!(parse_hex_color("fff").is_err());
    assert!(parse_hex_color("zzzzzz").is_err());
}

#[test]
fn frames_args_accept_layout_options() {
    let cli = Cli::try_parse_from([
        "glyphfx", "frames", "--text", "hi", "--font", "f.ttf", "--effects", "e.json", "--out",
        "out", "--max-width", "120", "--color", "00ff00",
    ])
    .unwrap();
    let Command::Frames(args) = cli.cmd else {
        panic!("expected frames");
    };
    assert_eq!(args.max_width, Some(120.0));
    assert_eq!(args.color, Rgba8::new(0, 255, 0, 255));
    assert_eq!(args.fps, 30);
}
