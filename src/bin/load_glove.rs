use clap::{App, Arg};
use log::{debug, info};
use std::env;
use std::error;
use std::io;

use glove_core::settings::Settings;
use glovetools::loaders::{glove_params, load_from_settings};
use glovetools::report::{write_report, Summary};
use storage::load_glove_vectors_with;

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let app = App::new("load_glove")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Load GloVe word vectors and report on one word")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Settings file; defaults are used if it does not exist"),
        )
        .arg(
            Arg::with_name("path")
                .short("p")
                .long("path")
                .takes_value(true)
                .help("Embeddings file, overriding the configured location"),
        )
        .arg(
            Arg::with_name("word")
                .short("w")
                .long("word")
                .takes_value(true)
                .help("Word to look up"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the report as JSON"),
        )
        .get_matches();

    // Only a config file named on the command line has to exist.
    let mut settings = Settings::from_file(
        app.value_of("config").unwrap_or("config.toml"),
        app.occurrences_of("config") > 0,
    )?;
    if let Some(word) = app.value_of("word") {
        settings.query.word = word.to_owned();
    }

    info!("glovetools load_glove {}", env!("CARGO_PKG_VERSION"));
    debug!("settings: {:#?}", settings);

    let (words, word_to_vec_map) = match app.value_of("path") {
        Some(path) => load_glove_vectors_with(path, &glove_params(&settings))?,
        None => load_from_settings(&settings, &env::current_dir()?)?,
    };

    let summary = Summary::new(&settings.query.word, &words, &word_to_vec_map);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&summary, app.is_present("json"), &mut out)
}
