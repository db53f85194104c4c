use std::error::Error;
use std::fs;
use std::iter;

use mandelbrot_viewer::{
    FilePresenterPort, InputEvent, Key, MemoryCanvas, PpmFilePresenter, ViewerConfig,
    ViewerController,
};

const OUTPUT_DIR: &str = "output";
const OUTPUT_FILE: &str = "output/viewer.ppm";

/// Replays key names given on the command line (e.g. `enter left plus`)
/// against an off-screen canvas and writes the final frame as a PPM.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let keys = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Key>())
        .collect::<Result<Vec<_>, _>>()?;

    let config = ViewerConfig::default();
    let canvas = MemoryCanvas::new(config.canvas_width)?;
    let mut controller = ViewerController::new(canvas, config);

    let events = keys
        .into_iter()
        .map(InputEvent::KeyPressed)
        .chain(iter::once(InputEvent::Quit));
    controller.run(events)?;

    log::info!("final state: {}", controller.state());

    fs::create_dir_all(OUTPUT_DIR)?;
    let canvas = controller.into_sink();
    PpmFilePresenter::new().present(canvas.buffer(), OUTPUT_FILE)?;

    println!("Saved to {}", OUTPUT_FILE);

    Ok(())
}
