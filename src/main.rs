use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    #[cfg(target_os = "windows")]
    dotlight::platform::windows::run();

    #[cfg(not(target_os = "windows"))]
    {
        tracing::error!("dotlight drives a Win32 layered window; this platform is not supported");
        std::process::exit(1);
    }
}
