mod config;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use rs_decipher_core::corpus::list_corpora;
use rs_decipher_core::model::cache::load_or_build;
use rs_decipher_core::{
	Candidate, CipherDecoder, ColumnGrid, FrequencyModel, LetterBigrams, ProbabilisticModel, StartFilter,
	TextReconstructor, WordUnigrams,
};

use crate::config::ServerConfig;

/// Query parameters for the `/v1/decode` endpoint
#[derive(Deserialize)]
struct DecodeParams {
	text: Option<String>,
	limit: Option<usize>,
}

/// Query parameters for the `/v1/reconstruct` endpoint
#[derive(Deserialize)]
struct ReconstructParams {
	limit: Option<usize>,
	accept_all: Option<bool>,
}

#[derive(Serialize)]
struct ModelSummary {
	name: &'static str,
	vocabulary_size: usize,
	total_count: u64,
	smoothing: f64,
}

impl ModelSummary {
	fn new(name: &'static str, frequencies: &FrequencyModel) -> Self {
		Self {
			name,
			vocabulary_size: frequencies.vocabulary_size(),
			total_count: frequencies.total_count(),
			smoothing: frequencies.smoothing(),
		}
	}
}

/// Models are read-only once loaded, so workers share them without a lock.
struct SharedData {
	bigrams: LetterBigrams,
	unigrams: WordUnigrams,
	data_dir: PathBuf,
}

fn truncate(mut candidates: Vec<Candidate>, limit: Option<usize>) -> Vec<Candidate> {
	if let Some(limit) = limit {
		candidates.truncate(limit);
	}
	candidates
}

/// HTTP GET endpoint `/v1/decode`
///
/// Ranks the 26 rotations of `text`, best first.
#[get("/v1/decode")]
async fn get_decoded(data: web::Data<SharedData>, query: web::Query<DecodeParams>) -> impl Responder {
	let text = match &query.text {
		Some(s) if !s.trim().is_empty() => s,
		_ => return HttpResponse::BadRequest().body("Missing or empty text"),
	};

	let ranked = CipherDecoder::new(&data.bigrams).decode(text);
	HttpResponse::Ok().json(truncate(ranked, query.limit))
}

/// HTTP POST endpoint `/v1/reconstruct`
///
/// The body is a shuffled text (`|th|is| i|` rows). Returns one candidate
/// per start column, best first; rejected starts have a `null` score.
#[post("/v1/reconstruct")]
async fn post_reconstruct(
	data: web::Data<SharedData>,
	query: web::Query<ReconstructParams>,
	body: String,
) -> impl Responder {
	let grid = match ColumnGrid::from_text(&body) {
		Ok(grid) if !grid.is_empty() => grid,
		Ok(_) => return HttpResponse::BadRequest().body("Empty grid"),
		Err(e) => return HttpResponse::BadRequest().body(format!("Malformed grid: {e}")),
	};
	let start_filter = if query.accept_all.unwrap_or(false) {
		StartFilter::AcceptAll
	} else {
		StartFilter::default()
	};

	let result = web::block(move || {
		TextReconstructor::new(&data.unigrams)
			.with_start_filter(start_filter)
			.reconstruct(&grid)
	})
	.await;

	match result {
		Ok(Ok(candidates)) => HttpResponse::Ok().json(truncate(candidates, query.limit)),
		Ok(Err(e)) => HttpResponse::InternalServerError().body(format!("Reconstruction failed: {e}")),
		Err(_) => HttpResponse::InternalServerError().body("Reconstruction worker failed"),
	}
}

#[get("/v1/models")]
async fn get_models(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json([
		ModelSummary::new("letter_bigrams", data.bigrams.frequencies()),
		ModelSummary::new("word_unigrams", data.unigrams.frequencies()),
	])
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<SharedData>) -> impl Responder {
	match list_corpora(&data.data_dir) {
		Ok(corpora) => HttpResponse::Ok().json(corpora),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

/// Loads both models (from their `.bin` caches when present) and applies
/// the configured smoothing.
fn load_models(config: &ServerConfig) -> Result<SharedData, rs_decipher_core::Error> {
	let mut bigrams = load_or_build(config.words_path(), |path| LetterBigrams::from_file(path))?;
	let mut unigrams = load_or_build(config.counts_path(), |path| WordUnigrams::from_file(path))?;

	if bigrams.frequencies().smoothing() != config.smoothing() {
		bigrams.calculate_probabilities(config.smoothing())?;
	}
	if unigrams.frequencies().smoothing() != config.smoothing() {
		unigrams.calculate_probabilities(config.smoothing())?;
	}

	Ok(SharedData { bigrams, unigrams, data_dir: config.data_dir.clone() })
}

/// Main entry point for the server.
///
/// Loads the models once, then serves them read-only from every worker.
/// Settings come from `RS_DECIPHER_*` environment variables (see `ServerConfig`).
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let config = ServerConfig::from_env()?;
	log::info!("Loading models from {}", config.data_dir.display());
	let shared_data = web::Data::new(load_models(&config)?);

	log::info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_decoded)
			.service(post_reconstruct)
			.service(get_models)
			.service(get_corpora)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}
