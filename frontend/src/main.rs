#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("iniciando o portal de solicitações de viagem");

    wasm_bindgen_futures::spawn_local(async {
        viagens_frontend::config::init().await;
        viagens_frontend::router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // O binário só faz sentido no navegador; fora dele nada a montar.
}
