use tally::runtime::{self, mount};
use tally::Config;
use wasm_bindgen::prelude::*;

fn config(side: &str) -> Config {
    Config::default()
        .with_decrease(format!("{side}-decrease"))
        .with_reset(format!("{side}-reset"))
        .with_increase(format!("{side}-increase"))
        .with_display(format!("{side}-count"))
}

// Two widgets on one page, each with its own count.
#[wasm_bindgen(start)]
fn main() -> Result<(), JsValue> {
    runtime::start(config("home"))?;

    mount(&config("away"))?.forget();

    Ok(())
}
