use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let presenter_factory = mandelbrot_explorer::PixelsPresenterFactory::new();
    let command = mandelbrot_explorer::RunGuiCommand::new(presenter_factory);

    if let Err(err) = command.execute() {
        log::error!("{}", err);
        return Err(err.into());
    }

    Ok(())
}
