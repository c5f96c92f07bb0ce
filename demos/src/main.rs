// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render one icon glyph and print what it draws.
//!
//! The icon is rendered into the recording backend, first in the normal
//! state and then in each requested interaction state, so the output shows
//! which frames reuse the cached path and paint.
//!
//! Examples:
//!   `cargo run -p print_demos -- --font assets/icons.ttf --codepoint e900`
//!   `RUST_LOG=debug cargo run -p print_demos -- --font icons.ttf --text A --state selected`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use kurbo::Rect;
use print_color::{ColorStateSpec, InteractionState, color_from_argb};
use print_icon::{IconConfig, IconEnvironment, IconError};
use print_imaging::{DrawOp, ImagingOp, StateOp};
use print_imaging_ref::RecordingBackend;
use print_typeface::{AssetDir, FontFile, TypefaceCache};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum State {
    Normal,
    Selected,
    Focused,
    Pressed,
    Enabled,
}

impl State {
    fn flags(self) -> InteractionState {
        match self {
            Self::Normal => InteractionState::NORMAL,
            Self::Selected => InteractionState::SELECTED,
            Self::Focused => InteractionState::FOCUSED,
            Self::Pressed => InteractionState::PRESSED,
            Self::Enabled => InteractionState::ENABLED,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Render an icon font glyph into the recording backend")]
struct Args {
    /// Icon font file; becomes the default font.
    #[arg(long)]
    font: PathBuf,
    /// Codepoint to draw, in hex.
    #[arg(long, value_parser = parse_hex, conflicts_with = "text")]
    codepoint: Option<u32>,
    /// Literal text to draw.
    #[arg(long)]
    text: Option<String>,
    /// Glyph size in pixels.
    #[arg(long, default_value_t = 24.0)]
    size: f32,
    /// Width of the bounds the glyph is centered in.
    #[arg(long, default_value_t = 48.0)]
    width: f64,
    /// Height of the bounds the glyph is centered in.
    #[arg(long, default_value_t = 48.0)]
    height: f64,
    /// Normal color as hex ARGB.
    #[arg(long, value_parser = parse_hex, default_value = "ff000000")]
    color: u32,
    /// Color used while selected, as hex ARGB.
    #[arg(long, value_parser = parse_hex, default_value = "ffff0000")]
    selected_color: u32,
    /// Interaction states to render after the normal one.
    #[arg(long = "state", value_enum)]
    states: Vec<State>,
}

fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("U+");
    u32::from_str_radix(digits, 16).map_err(|err| format!("`{s}` is not hex: {err}"))
}

fn run(args: &Args) -> Result<(), IconError> {
    let typefaces = TypefaceCache::shared();
    let font = typefaces.init_default(&FontFile::new(&args.font), None)?;
    log::info!("loaded `{}` from {}", font.key(), font.source_path());

    let assets = AssetDir::new(".");
    let env = IconEnvironment::new(typefaces, &assets);
    let colors = ColorStateSpec::builder()
        .normal(color_from_argb(args.color))
        .selected(color_from_argb(args.selected_color))
        .build()?;
    let mut config = IconConfig::new().size_px(args.size).color_spec(colors);
    config = match (&args.text, args.codepoint) {
        (Some(text), _) => config.text(text.clone()),
        (None, Some(cp)) => config.codepoint(cp),
        (None, None) => config,
    };
    let mut icon = config.build(&env)?;

    let bounds = Rect::new(0.0, 0.0, args.width, args.height);
    let mut backend = RecordingBackend::default();
    let frames = std::iter::once(State::Normal).chain(args.states.iter().copied());
    for state in frames {
        let redraw = icon.on_state_changed(state.flags());
        let drew = icon.render_into(&mut backend, bounds, state.flags());
        println!("{state:?}: color changed: {redraw}, drew: {drew}");
        for op in backend.ops() {
            print_op(op, &backend);
        }
        backend.clear_events();
    }
    println!(
        "paths created: {}, paints created: {}",
        backend.paths_created(),
        backend.paints_created()
    );
    icon.release(&mut backend);
    Ok(())
}

fn print_op(op: &ImagingOp, backend: &RecordingBackend) {
    match op {
        ImagingOp::State(StateOp::SetPaint(id)) => {
            println!("  set paint {id:?}: {:?}", backend.paint(*id).map(|p| &p.brush));
        }
        ImagingOp::Draw(DrawOp::FillPath(id)) => {
            let commands = backend.path(*id).map_or(0, |p| p.commands.len());
            println!("  fill path {id:?} ({commands} commands)");
        }
        other => println!("  {other:?}"),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
