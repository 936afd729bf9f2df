//! Rendering properties of the public library API

use chalk::{Color, Style, RESET};

#[test]
fn every_standard_color_renders_thirty_plus_index() {
    for color in Color::ALL {
        assert_eq!(
            color.to_string(),
            format!("\x1b[{}m", 30 + color.value())
        );
    }
}

#[test]
fn red_color_snapshot() {
    insta::assert_debug_snapshot!(Color::Red.color("hi"), @r#""\u{1b}[31mhi\u{1b}[39m""#);
}

#[test]
fn full_style_snapshot() {
    let style = Color::Blue.new_style().with_background(Color::Green);
    insta::assert_debug_snapshot!(style.style("x"), @r#""\u{1b}[42m\u{1b}[34mx\u{1b}[49m\u{1b}[39m""#);
}

#[test]
fn style_output_is_prefix_text_reset() {
    let mut style = Style::default();
    style.foreground(Color::Magenta);
    style.background(Color::Yellow);
    assert_eq!(style.style("body"), format!("{}body{}", style, RESET));
}

#[test]
fn builder_is_order_independent() {
    let a = Style::default()
        .with_foreground(Color::Blue)
        .with_background(Color::Red);
    let b = Style::default()
        .with_background(Color::Red)
        .with_foreground(Color::Blue);
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a, Color::Blue.new_style().with_background(Color::Red));
}

#[test]
fn style_from_color_keeps_default_background() {
    let style: Style = Color::Cyan.into();
    assert_eq!(style.to_string(), "\x1b[49m\x1b[36m");
}

#[test]
fn styles_can_be_shared_across_threads() {
    let style = Color::Green.new_style();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || style.style(&i.to_string())))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{}{}{}", style, i, RESET));
    }
}
