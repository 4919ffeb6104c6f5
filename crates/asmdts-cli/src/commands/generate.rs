use log::{debug, warn};

use asmdts_lib::generate::generate_all;
use asmdts_lib::{GenerationConfig, GenerationJob, GenerationOptions, Generator, PlatformLocator};

use super::backend::BackendProcess;

/// Resolve references and run the emitter for every assembly.
pub fn run(options: GenerationOptions) -> asmdts_lib::Result<()> {
    let locator = asmdts_lib::HostLocator::detect();
    let mut backend = BackendProcess::locate();
    debug!("emitter: {}", backend.program().display());
    execute(options, &locator, &mut backend)?;
    Ok(())
}

/// Resolution and generation with an explicit locator and generator.
///
/// Unresolved assemblies are logged and generation continues with them as given.
pub fn execute<G: Generator>(
    options: GenerationOptions,
    locator: &dyn PlatformLocator,
    generator: &mut G,
) -> asmdts_lib::Result<Vec<GenerationJob>> {
    let (config, unresolved) = GenerationConfig::resolve(options, locator)?;
    for module in &unresolved {
        warn!("{module}");
    }
    generate_all(&config, generator)
}
