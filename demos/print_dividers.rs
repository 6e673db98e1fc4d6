use mincfo_motion::curve::{DividerVariant, Responsive};

fn main() {
    tracing_subscriber::fmt::init();

    for width in [390.0, 820.0, 1440.0] {
        let responsive = Responsive::for_width(width);
        println!(
            "# viewport {width}px: curve scale {}, wave height {}",
            responsive.curve_scale, responsive.wave_height
        );
        for variant in DividerVariant::ALL {
            for progress in [0.0, 0.5, 1.0] {
                let curve = variant
                    .profile()
                    .at_scaled(progress, responsive.curve_scale);
                println!("{:<13} p={progress:<4} {}", variant.name(), curve.svg_path_d());
            }
        }
    }
}
