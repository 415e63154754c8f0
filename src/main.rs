use anyhow::{Context, Result};
use leptos::logging::log;
use profile_form::App;

fn setup() -> Result<()> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .context("no document body to mount into")?;

    leptos::mount::mount_to(body, App).forget();
    log!("profile form mounted");

    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(x) = setup() {
        panic!("error: {x}")
    }
}
