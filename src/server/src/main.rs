use dotenv::dotenv;
use libdiffview::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, DEFAULT_TEMPLATES_DIR,
};
use libdiffview::util;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod helpers;
pub mod params;
pub mod routes;
pub mod test;

extern crate log;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use clap::{Arg, Command};

use std::env;
use std::path::PathBuf;

const VERSION: &str = libdiffview::constants::DIFFVIEW_VERSION;

const START_SERVER_USAGE: &str = "Usage: `diffview-server start -i 0.0.0.0 -p 8080`";

const INVALID_PORT_MSG: &str = "Port must be a valid number between 0-65535";

const ABOUT: &str =
    "DiffView Server compares two blobs of text and renders the result in the browser";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    util::logging::init_logging();

    let templates_dir = match env::var("TEMPLATES_DIR") {
        Ok(dir) => dir,
        Err(_) => String::from(DEFAULT_TEMPLATES_DIR),
    };

    let static_dir = match env::var("STATIC_DIR") {
        Ok(dir) => dir,
        Err(_) => String::from(DEFAULT_STATIC_DIR),
    };

    let command = Command::new("diffview-server")
        .version(VERSION)
        .about(ABOUT)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("start")
                .about("Starts the server on the given host and port")
                .arg(
                    Arg::new("ip")
                        .long("ip")
                        .short('i')
                        .default_value(DEFAULT_HOST)
                        .help("What host to bind the server to")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .default_value(DEFAULT_PORT)
                        .help("What port to bind the server to")
                        .action(clap::ArgAction::Set),
                ),
        );
    let matches = command.get_matches();

    match matches.subcommand() {
        Some(("start", sub_matches)) => {
            match (
                sub_matches.get_one::<String>("ip"),
                sub_matches.get_one::<String>("port"),
            ) {
                (Some(host), Some(port)) => {
                    let port: u16 = port.parse::<u16>().expect(INVALID_PORT_MSG);

                    let data = app_data::DiffAppData::new(
                        PathBuf::from(templates_dir),
                        PathBuf::from(static_dir),
                    );

                    println!("DiffView v{VERSION}");
                    println!("Running on {host}:{port}");
                    println!("Serving templates from: {}", data.templates_dir.display());
                    println!("Serving static assets from: {}", data.static_dir.display());

                    HttpServer::new(move || {
                        App::new()
                            .app_data(data.clone())
                            .configure(routes::config)
                            .service(Files::new("/static", data.static_dir.clone()))
                            .default_service(web::route().to(controllers::not_found::index))
                            .wrap(Logger::default())
                    })
                    .bind((host.to_owned(), port))?
                    .run()
                    .await
                }
                _ => {
                    eprintln!("{START_SERVER_USAGE}");
                    Ok(())
                }
            }
        }
        _ => unreachable!(), // subcommand_required means clap rejects anything else
    }
}
