use mincfo_motion::content::SiteContent;
use mincfo_motion::demo::ConversationEngine;
use mincfo_motion::Millis;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/home.sv.json".to_owned());
    let content = SiteContent::from_path(&path)?;
    let mut engine = ConversationEngine::new(content.copilot_script()?, content.copilot_timings())?;

    engine.set_visible(true);
    // Sample at 250 ms like a slow animation frame, printing only when the view changes.
    let mut last = engine.snapshot();
    println!("{:>6} ms  {:?}", 0, last);
    for step in 1..=80u64 {
        engine.advance(Millis(250));
        let snap = engine.snapshot();
        if snap != last {
            println!(
                "{:>6} ms  {:<8} #{} \"{}\"",
                step * 250,
                snap.stage.as_str(),
                snap.index,
                snap.typed_question
            );
            last = snap;
        }
    }
    Ok(())
}
