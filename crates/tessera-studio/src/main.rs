use std::path::PathBuf;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use tessera_engine::coords::{Rect, Vec2};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::paint::Color;
use tessera_engine::render::Target;
use tessera_engine::scene::{DrawCmdList, DrawData, DrawVert};
use tessera_engine::surface::PixelSurface;
use tessera_engine::texture::{TextureId, TextureSet};

const DEFAULT_OUT: &str = "tessera-studio.png";
const DEFAULT_SIZE: (u32, u32) = (320, 200);
const FRAMES: u32 = 3;

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    init_logging(LoggingConfig::default().with_frame_stats(args.trace_frames));
    let (width, height) = args.size;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        TESSERA STUDIO  (headless)      ║");
    println!("  ║   software rasterizer  ·  draw lists   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut surface = PixelSurface::new(width, height);
    let mut textures = TextureSet::new();
    let atlas = textures.insert(surface.upload_texture(atlas()));
    let white_uv = textures
        .get(atlas)
        .map(|t| t.solid_color_uv())
        .context("atlas texture missing from set")?;

    let mut target = Target::new(width, height, surface);

    for frame in 0..FRAMES {
        let data = build_frame(width, height, atlas, white_uv, frame);
        target.surface_mut().clear(Color::new(0.08, 0.08, 0.1, 1.0));
        target.render(&data, &textures);
        report(frame, &target);
    }

    // Resizing drops every cached triangle; the next frame rebuilds them.
    let (width, height) = (width + width / 2, height + height / 2);
    target.resize(width, height);
    target.surface_mut().resize(width, height);
    let data = build_frame(width, height, atlas, white_uv, FRAMES);
    target.surface_mut().clear(Color::new(0.08, 0.08, 0.1, 1.0));
    target.render(&data, &textures);
    report(FRAMES, &target);

    target
        .surface()
        .image()
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("  wrote {} ({}x{})", args.out.display(), width, height);
    println!();
    Ok(())
}

struct Args {
    out: PathBuf,
    size: (u32, u32),
    /// Log every frame's render stats at trace level.
    trace_frames: bool,
}

impl Args {
    /// `tessera-studio [--trace-frames] [OUT.png] [WIDTHxHEIGHT]`
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut trace_frames = false;
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--trace-frames" {
                trace_frames = true;
            } else if arg.starts_with("--") {
                anyhow::bail!("unknown flag {arg}");
            } else {
                positional.push(arg);
            }
        }
        anyhow::ensure!(positional.len() <= 2, "too many arguments");

        let mut positional = positional.into_iter();
        let out = positional.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_OUT.into());
        let size = match positional.next() {
            Some(s) => parse_size(&s).with_context(|| format!("invalid size {s:?}"))?,
            None => DEFAULT_SIZE,
        };
        Ok(Self { out, size, trace_frames })
    }
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s.split_once('x').context("expected WIDTHxHEIGHT")?;
    let w: u32 = w.trim().parse().context("width")?;
    let h: u32 = h.trim().parse().context("height")?;
    anyhow::ensure!(w > 0 && h > 0, "surface has zero size");
    Ok((w, h))
}

fn report(frame: u32, target: &Target<PixelSurface>) {
    let s = target.stats();
    println!(
        "  frame {frame}  tris {:>3}  rects {:>2}  raster {:>3}  cache {:>2}/{:<2}  entries {}",
        s.triangles,
        s.rects_filled + s.rects_copied,
        s.rasterizations,
        s.cache_hits,
        s.cache_hits + s.cache_misses,
        target.cache_len(),
    );
    log::debug!("frame {frame}: {s}");
}

/// 8x8 atlas: opaque white texel at (0, 0) for untextured geometry, a checker
/// pattern everywhere else.
fn atlas() -> RgbaImage {
    RgbaImage::from_fn(8, 8, |x, y| match (x, y) {
        (0, 0) => Rgba([255, 255, 255, 255]),
        _ if (x + y) % 2 == 0 => Rgba([230, 180, 60, 255]),
        _ => Rgba([40, 90, 160, 255]),
    })
}

/// A window-like panel: frame, title bar gradient, a clipped body with a
/// column of expander arrows, an image and a translucent overlay.
fn build_frame(width: u32, height: u32, atlas: TextureId, white_uv: Vec2, frame: u32) -> DrawData {
    let (w, h) = (width as f32, height as f32);
    let mut list = DrawCmdList::new(Rect::new(0.0, 0.0, w, h), atlas, white_uv);

    let min = Vec2::new(16.0, 12.0);
    let max = Vec2::new(w - 16.0, h - 12.0);
    list.add_rect_filled(min, max, 0xFF30_2A26);
    list.add_rect_multicolor(
        min,
        Vec2::new(max.x, min.y + 18.0),
        [0xFFB0_6020, 0xFF60_3010, 0xFF60_3010, 0xFFB0_6020],
    );

    list.push_clip_rect(Rect::from_min_max(Vec2::new(min.x + 4.0, min.y + 22.0), max - Vec2::new(4.0, 4.0)));

    // Same arrow shape at whole-pixel steps: one rasterization, many copies.
    let mut y = min.y + 28.0;
    while y + 10.0 < max.y {
        let x = min.x + 10.0;
        list.add_triangle_filled(
            Vec2::new(x, y),
            Vec2::new(x + 9.0, y),
            Vec2::new(x + 4.5, y + 7.5),
            0xFFDD_DDDD,
        );
        list.add_rect_filled(Vec2::new(x + 16.0, y + 1.0), Vec2::new(x + 90.0, y + 7.0), 0xFF80_7870);
        y += 14.0;
    }

    let img_min = Vec2::new(max.x - 72.0, min.y + 28.0);
    list.add_image(img_min, img_min + Vec2::new(64.0, 64.0), Vec2::zero(), Vec2::new(1.0, 1.0), 0xFFFF_FFFF);

    // Spinner: a shaded triangle rotating a few degrees per frame.
    let center = Vec2::new(max.x - 40.0, max.y - 36.0);
    let angle = frame as f32 * 0.35;
    let corner = |k: f32| {
        let a = angle + k * std::f32::consts::TAU / 3.0;
        center + Vec2::new(a.cos(), a.sin()) * 20.0
    };
    list.add_triangle(
        DrawVert::new(corner(0.0), white_uv, 0xFF00_00FF),
        DrawVert::new(corner(1.0), white_uv, 0xFF00_FF00),
        DrawVert::new(corner(2.0), white_uv, 0xFFFF_0000),
    );
    list.pop_clip_rect();

    list.add_callback(|list, _| {
        log::trace!("studio: overlay callback after {} indices", list.idx_buffer.len());
    });
    list.add_rect_filled(Vec2::new(0.0, h - 8.0), Vec2::new(w, h), 0x8000_0000);

    DrawData::new(vec![list])
}
