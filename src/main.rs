use tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::info!("Starting dashboard shell");

    dioxus::launch(dashboard_shell::App);
}
