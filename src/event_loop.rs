//! Synchronous display loop: capture, convert, paint, poll input.
//!
//! Each tick converts one frame, paints it and then waits for input for
//! whatever is left of the tick. Terminal resizes are picked up by polling
//! the size every tick rather than by signal, and applied through
//! [`AsciiConverter::reconfigure`].

use crossterm::event::{self, Event};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::ascii::{calculate_dimensions, TargetDims};
use crate::cli::Settings;
use crate::converter::AsciiConverter;
use crate::error::AppError;
use crate::input::{handle_key_event, KeyAction};
use crate::source::{CaptureError, FrameSource};
use crate::terminal::{Painter, StatusBar};

/// Target grid for a source frame on the current terminal.
///
/// With `fit` the grid width follows the terminal; otherwise the configured
/// target is only shrunk to what the terminal can show. A row limit is only
/// imposed when the width-derived height would overflow the terminal, so
/// the picture keeps its aspect ratio either way.
pub fn target_for_terminal(
    base: TargetDims,
    source: (u32, u32),
    cols: u16,
    rows: u16,
    fit: bool,
) -> TargetDims {
    let cols = u32::from(cols.max(1));
    let rows = u32::from(rows.max(1));

    let width = if fit { cols } else { base.width.min(cols) };
    let height = if fit { None } else { base.height.map(|h| h.min(rows)) };
    let target = TargetDims { width, height };
    if height.is_some() {
        return target;
    }

    match calculate_dimensions(source.0, source.1, target) {
        Ok((_, planned)) if planned > rows => TargetDims {
            width,
            height: Some(rows),
        },
        _ => target,
    }
}

/// Time per frame for a target rate.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

/// What happened during one capture/convert/paint step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was converted and painted
    Painted,
    /// The source had no frame; nothing was painted
    Skipped,
    /// The source is closed
    Closed,
}

/// Everything one display step writes to besides the converter.
pub struct Screen<'a, W: Write> {
    pub out: &'a mut W,
    pub painter: &'a mut Painter,
    pub status: &'a mut StatusBar,
    /// Terminal size as `(cols, rows)`
    pub size: (u16, u16),
}

/// Capture one frame, convert it and paint it.
///
/// `NoFrame` skips the step without touching the screen, `Closed` is
/// reported as [`TickOutcome::Closed`], and any other capture error aborts.
pub fn step<S, W>(
    source: &mut S,
    converter: &mut AsciiConverter,
    settings: &Settings,
    screen: Screen<'_, W>,
) -> Result<TickOutcome, AppError>
where
    S: FrameSource + ?Sized,
    W: Write,
{
    let frame = match source.next_frame() {
        Ok(frame) => frame,
        Err(CaptureError::NoFrame) => {
            log::warn!("No frame available, skipping tick");
            return Ok(TickOutcome::Skipped);
        }
        Err(CaptureError::Closed) => {
            log::info!("Frame source closed");
            return Ok(TickOutcome::Closed);
        }
        Err(e) => return Err(e.into()),
    };

    let (cols, rows) = screen.size;
    let frame_rows = rows.saturating_sub(screen.status.height()).max(1);
    let target = target_for_terminal(
        settings.converter.target,
        (frame.width, frame.height),
        cols,
        frame_rows,
        settings.fit_terminal,
    );
    converter.reconfigure(target.width, target.height)?;

    let ansi = converter.convert_ansi(&frame)?;
    let status_text = screen.status.visible.then(|| {
        screen
            .status
            .format(converter.preset(), converter.color_scheme(), cols as usize)
    });
    screen
        .painter
        .paint(screen.out, &ansi, status_text.as_deref(), frame_rows)?;
    screen.status.frame_displayed(Instant::now());

    Ok(TickOutcome::Painted)
}

/// Whether the loop keeps going after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Apply a key action to the converter.
fn apply_key(action: KeyAction, converter: &mut AsciiConverter) -> Flow {
    match action {
        KeyAction::Quit => return Flow::Stop,
        KeyAction::CyclePreset => converter.set_preset(converter.preset().next()),
        KeyAction::CycleScheme => converter.set_color_scheme(converter.color_scheme().next()),
        KeyAction::None => {}
    }
    Flow::Continue
}

/// Run the viewer until the user quits or the source closes.
///
/// The terminal must already be in raw mode on the alternate screen.
pub fn run<S, W>(
    source: &mut S,
    converter: &mut AsciiConverter,
    settings: &Settings,
    out: &mut W,
) -> Result<(), AppError>
where
    S: FrameSource + ?Sized,
    W: Write,
{
    let interval = frame_interval(settings.fps);
    let mut status = StatusBar::new(settings.status_bar);
    let mut painter = Painter::new();

    log::info!(
        "Starting display loop: source={}, {} fps, preset={}, scheme={}",
        source.name(),
        settings.fps,
        converter.preset(),
        converter.color_scheme()
    );

    loop {
        let tick_start = Instant::now();

        let screen = Screen {
            out: &mut *out,
            painter: &mut painter,
            status: &mut status,
            size: crossterm::terminal::size().unwrap_or((80, 24)),
        };
        if step(source, converter, settings, screen)? == TickOutcome::Closed {
            break;
        }

        if poll_input(tick_start + interval, converter)? == Flow::Stop {
            break;
        }
    }

    log::info!("Display loop finished");
    Ok(())
}

/// Handle input until `deadline`, which also paces the loop.
fn poll_input(deadline: Instant, converter: &mut AsciiConverter) -> io::Result<Flow> {
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(Flow::Continue);
        }
        if let Event::Key(key) = event::read()? {
            if apply_key(handle_key_event(key), converter) == Flow::Stop {
                return Ok(Flow::Stop);
            }
        }
        // Resize events need no handling; size is polled every tick.
        if Instant::now() >= deadline {
            return Ok(Flow::Continue);
        }
    }
}
