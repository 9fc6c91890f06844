use anyhow::Result;
use log::debug;

use parity_holder::{config::DEFAULT_VALUE, format_value_line, Data};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let data = Data::new(DEFAULT_VALUE);
    debug!("Constructed {:?}", data);

    println!("{}", format_value_line(data.adjusted_value()));

    Ok(())
}
