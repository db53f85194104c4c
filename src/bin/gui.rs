use std::error::Error;

use mandelbrot_viewer::ViewerConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    mandelbrot_viewer::run_gui(ViewerConfig::default())?;

    Ok(())
}
