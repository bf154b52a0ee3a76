//! Headless walkthrough of the widget set.
//!
//! Usage: `tessel-demo [FONT_PATH] [FRAMES]`
//!
//! Without a font the fixed-advance metrics are used. A scripted pointer
//! and keyboard click through the demo windows, type into a text field and
//! open a menu; the draw list is summarized at the end of every frame.

use std::env;

use anyhow::{Context as _, Result};

use tessel_engine::logging::{init_logging, LoggingConfig};
use tessel_engine::text::FontSystem;
use tessel_ui::prelude::*;

/// Application state the UI edits in place.
#[derive(Debug)]
struct Demo {
    clicks: u32,
    show_tools: bool,
    volume: f32,
    level: i32,
    speed: f32,
    mode: i32,
    selected: bool,
    tools_open: bool,
    name: String,
    theme: usize,
    wrap: bool,
    filter: TextFilter,
    log: Vec<String>,
}

const THEMES: [&str; 3] = ["Dark", "Light", "Classic"];

impl Default for Demo {
    fn default() -> Self {
        Self {
            clicks: 0,
            show_tools: true,
            volume: 0.5,
            level: 3,
            speed: 1.0,
            mode: 0,
            selected: false,
            tools_open: true,
            name: String::new(),
            theme: 0,
            wrap: false,
            filter: TextFilter::new("-#1"),
            log: (0..200).map(|i| format!("event #{i}")).collect(),
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig { timestamps: false, ..LoggingConfig::default() });

    let mut args = env::args().skip(1);
    let font_path = args.next();
    let frames: u32 = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid frame count {n:?}"))?,
        None => script().len() as u32,
    };

    let text: Box<dyn TextMeasure> = match font_path.as_deref() {
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading font {path}"))?;
            let mut fonts = FontSystem::new();
            fonts.load_font(&bytes).with_context(|| format!("parsing font {path}"))?;
            log::info!("using font {path}");
            Box::new(fonts)
        }
        None => Box::new(FixedMetrics::default()),
    };

    let mut ctx = Context::new(text);
    ctx.input_mut().apply_event(InputEvent::Resized { width: 1280.0, height: 720.0 });

    let mut demo = Demo::default();
    let script = script();
    for frame in 0..frames {
        if let Some(events) = script.get(frame as usize) {
            for ev in events {
                ctx.input_mut().apply_event(ev.clone());
            }
        }
        ctx.new_frame(1.0 / 60.0);
        build_ui(&mut ctx, &mut demo);
        ctx.render();

        let items = ctx.draw_list().submitted().len();
        log::info!(
            "frame {frame}: {items} draw items, hovered window {:?}, mouse capture {}, keyboard capture {}",
            ctx.hovered_window().map(|w| ctx.window_at(w).name().to_owned()),
            ctx.wants_mouse_capture(),
            ctx.wants_keyboard_capture(),
        );
    }

    log::info!("clicks {} volume {:.2} level {} mode {}", demo.clicks, demo.volume, demo.level, demo.mode);
    log::info!("name {:?} theme {} wrap {}", demo.name, THEMES[demo.theme], demo.wrap);
    for w in ctx.windows_in_focus_order() {
        log::info!("window {:?} at {:?} size {:?}", w.name(), w.pos(), w.size());
    }
    Ok(())
}

/// Events per frame: hover the button, click it, drag the tools window by
/// its title bar, type a name into its text field, then open its menu.
fn script() -> Vec<Vec<InputEvent>> {
    vec![
        vec![],
        vec![InputEvent::pointer_moved(60.0, 80.0)],
        vec![InputEvent::left_press(60.0, 80.0)],
        vec![InputEvent::left_release(60.0, 80.0)],
        vec![InputEvent::left_press(700.0, 60.0)],
        vec![InputEvent::pointer_moved(760.0, 120.0)],
        vec![InputEvent::left_release(760.0, 120.0)],
        vec![InputEvent::pointer_moved(200.0, 400.0), InputEvent::wheel_lines(-4.0)],
        vec![InputEvent::left_press(600.0, 170.0)],
        vec![InputEvent::left_release(600.0, 170.0), InputEvent::text("tessel")],
        vec![InputEvent::key_press(Key::Backspace)],
        vec![InputEvent::key_release(Key::Backspace), InputEvent::key_press(Key::Enter)],
        vec![InputEvent::key_release(Key::Enter), InputEvent::pointer_moved(600.0, 220.0)],
        vec![InputEvent::pointer_moved(900.0, 230.0)],
    ]
}

fn build_ui(ctx: &mut Context, demo: &mut Demo) {
    ctx.set_next_window_pos(Vec2::new(40.0, 40.0), Cond::ONCE);
    ctx.set_next_window_size(Vec2::new(420.0, 600.0), Cond::ONCE);
    if ctx.begin_window("Demo", None, WindowFlags::empty()) {
        ctx.layout_dynamic(0.0, 2);
        if ctx.button("Click me") {
            demo.clicks += 1;
            log::info!("clicked {} time(s)", demo.clicks);
        }
        ctx.labeled_text("Clicks", &demo.clicks.to_string());

        ctx.layout_dynamic(0.0, 1);
        ctx.checkbox("Show tools", &mut demo.show_tools);
        ctx.slider_float("Volume", &mut demo.volume, 0.0, 1.0);
        ctx.slider_int("Level", &mut demo.level, 0, 10);
        ctx.drag_float("Speed", &mut demo.speed, 0.1, 0.0, 10.0);
        ctx.progress_bar(demo.volume, Vec2::new(-1.0, 0.0), None);

        ctx.layout_template_begin(0.0);
        ctx.layout_template_push_static(60.0);
        ctx.layout_template_push_dynamic();
        ctx.layout_template_end();
        ctx.text("Mode");
        ctx.layout_row(RowType::Dynamic, 0.0, &[0.5, 0.5]);
        ctx.radio_button("Fast", &mut demo.mode, 0);
        ctx.radio_button("Safe", &mut demo.mode, 1);

        ctx.layout_dynamic(0.0, 1);
        ctx.separator_text("Details");
        ctx.collapsing_header("Advanced", |ctx| {
            ctx.selectable("Selectable row", &mut demo.selected);
            if ctx.tree_node("Nested") {
                ctx.text("Inside a tree node");
                ctx.tree_pop();
            }
        });

        if ctx.begin_tab_bar("tabs") {
            if ctx.begin_tab("General") {
                ctx.text("General settings");
                ctx.end_tab();
            }
            if ctx.begin_tab("Log") {
                ctx.text("See the child below");
                ctx.end_tab();
            }
            ctx.end_tab_bar();
        }

        ctx.text_filter("Filter", &mut demo.filter);
        let shown: Vec<&str> = demo.log.iter().map(String::as_str).filter(|l| demo.filter.pass_filter(l)).collect();
        ctx.child("log", |ctx| {
            let mut clipper = ListClipper::new(shown.len());
            while clipper.step(ctx) {
                for i in clipper.display_range() {
                    ctx.text(shown[i]);
                }
            }
        });
        ctx.end_window();
    }

    if demo.show_tools {
        ctx.set_next_window_pos(Vec2::new(500.0, 40.0), Cond::ONCE);
        ctx.set_next_window_size(Vec2::new(300.0, 240.0), Cond::ONCE);
        if ctx.begin_window("Tools", Some(&mut demo.tools_open), WindowFlags::empty()) {
            ctx.layout_static(0.0, 120.0, 2);
            ctx.small_button("Apply");
            ctx.tooltip_text("Applies the current settings");
            ctx.small_button("Reset");

            ctx.layout_dynamic(0.0, 1);
            ctx.input_text_hint("Name", "your name", &mut demo.name, InputTextFlags::empty());
            if ctx.begin_combo("Theme", THEMES[demo.theme], ComboFlags::HEIGHT_SMALL) {
                for (i, theme) in THEMES.iter().enumerate() {
                    let mut selected = i == demo.theme;
                    if ctx.selectable(theme, &mut selected) {
                        demo.theme = i;
                    }
                }
                ctx.end_combo();
            }
            if ctx.begin_menu("More", true) {
                if ctx.menu_item("Reset name", None, false, !demo.name.is_empty()) {
                    demo.name.clear();
                }
                ctx.menu_item_toggle("Word wrap", Some("Alt+Z"), &mut demo.wrap, true);
                ctx.end_menu();
            }
            ctx.end_window();
        }
        if !demo.tools_open {
            demo.show_tools = false;
        }
    }
}
