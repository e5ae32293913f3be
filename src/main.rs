use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use fantasy_stats::args;
use fantasy_stats::controller::panel::{index, panel};
use fantasy_stats::model::{DashboardContext, LAYOUT_VERSION};
use log::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "loading position tables from {} (source layout v{LAYOUT_VERSION})",
        args.data_dir.display()
    );
    let context = Data::new(DashboardContext::load(&args.data_dir));
    let loaded = context.loaded_positions();
    info!(
        "{} of 4 positions available: {}",
        loaded.len(),
        loaded
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let static_dir = args.static_dir.clone();
    info!("listening on {}:{}", args.bind_addr.0, args.bind_addr.1);
    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            .route("/", web::get().to(index))
            .route("/panel", web::get().to(panel))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(args.bind_addr.clone())?
    .run()
    .await?;
    Ok(())
}
