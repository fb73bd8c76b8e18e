use pretty_assertions::assert_eq;

use tse_render::ColorMode;

use super::{parse_render_options, OutputFormat};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults_when_no_options_given() {
    let (options, positional) =
        parse_render_options(&args(&["Cannot find name 'foo'."])).unwrap();
    assert_eq!(options.format, OutputFormat::Text);
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(options.output, None);
    assert_eq!(positional, args(&["Cannot find name 'foo'."]));
}

#[test]
fn format_and_color_flags_are_consumed() {
    let (options, positional) =
        parse_render_options(&args(&["--format=html", "--color=never", "message"])).unwrap();
    assert_eq!(options.format, OutputFormat::Html);
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(positional, args(&["message"]));
}

#[test]
fn output_flag_takes_the_next_argument() {
    let (options, positional) =
        parse_render_options(&args(&["-o", "out.html", "--format=json", "message"])).unwrap();
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(
        options.output.as_deref(),
        Some(std::path::Path::new("out.html"))
    );
    assert_eq!(positional, args(&["message"]));
}

#[test]
fn positional_order_survives_interleaved_flags() {
    let (_, positional) =
        parse_render_options(&args(&["first", "--format=text", "second"])).unwrap();
    assert_eq!(positional, args(&["first", "second"]));
}

#[test]
fn trailing_output_flag_is_an_error() {
    let result = parse_render_options(&args(&["message", "-o"]));
    assert_eq!(result.err(), Some("'-o' requires a path".to_string()));
}

#[test]
fn unknown_format_is_an_error() {
    let result = parse_render_options(&args(&["--format=pdf"]));
    assert_eq!(
        result.err(),
        Some("unknown format 'pdf' (valid formats: text, html, json)".to_string())
    );
}

#[test]
fn unknown_color_mode_is_an_error() {
    let result = parse_render_options(&args(&["--color=sometimes"]));
    assert_eq!(
        result.err(),
        Some("unknown color mode 'sometimes' (valid modes: auto, always, never)".to_string())
    );
}
