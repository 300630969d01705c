use gametrack::args;
use gametrack::{Dashboard, HttpDashboardApi, Msg, NavTarget};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = args::args_checks();
    info!(api_base = %args.api_base, "rendering dashboard");

    let api = HttpDashboardApi::new(&args.api_base);
    let mut dashboard = Dashboard::new(api, args.layout, args.options, args.stat);
    dashboard.dispatch(Msg::Startup).await;
    if let Some(view) = args.navigate {
        dashboard.dispatch(Msg::Navigate(NavTarget::View(view))).await;
    }

    let page = dashboard.render().into_string();
    match args.output {
        Some(path) => {
            tokio::fs::write(&path, page).await?;
            info!(path = %path.display(), "page written");
        }
        None => println!("{page}"),
    }
    Ok(())
}
