use ucd_update::{asset, logging};

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    if let Err(err) = ucd_update::update(asset::REMOTE_URL, &asset::destination()) {
        eprintln!("ucd-update error: {:#}", err);
        std::process::exit(1);
    }
}
