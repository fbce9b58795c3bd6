// EduPath landing - Leptos 0.8 CSR entry point

use edupath_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("EduPath landing {} starting", edupath_landing::VERSION);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
