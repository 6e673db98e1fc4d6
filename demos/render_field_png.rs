use mincfo_motion::field::{BackdropKind, FrameLoop};
use mincfo_motion::render::{BackendKind, RasterOpts, create_backend};
use mincfo_motion::SurfaceSize;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    std::fs::create_dir_all("target")?;
    let size = SurfaceSize::new(1280.0, 720.0, 2.0)?;
    let mut backend = create_backend(
        BackendKind::Cpu,
        RasterOpts {
            clear_rgba: Some([5, 7, 16, 255]),
            ..RasterOpts::default()
        },
    )?;

    for (kind, name) in [(BackdropKind::Dots, "dots"), (BackdropKind::Beam, "beam")] {
        let mut frames = FrameLoop::new(kind.build(size, 7), false);
        let mut last = None;
        // Two seconds of animation.
        for _ in 0..125 {
            last = frames.tick().or(last);
        }
        let Some(list) = last else {
            anyhow::bail!("{name}: no frame painted");
        };

        let frame = backend.render(&list)?.to_straight();
        let out = format!("target/field_{name}.png");
        image::save_buffer_with_format(
            &out,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        eprintln!("wrote {out} ({} ops)", list.len());
    }
    Ok(())
}
